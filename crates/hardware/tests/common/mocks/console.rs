use ls8_core::soc::Console;
use mockall::mock;
use std::io;

mock! {
    /// Mock console for asserting on exactly which values `PRN` emits.
    pub Console {}

    impl Console for Console {
        fn print_value(&mut self, value: u8) -> io::Result<()>;
        fn flush(&mut self) -> io::Result<()>;
    }
}
