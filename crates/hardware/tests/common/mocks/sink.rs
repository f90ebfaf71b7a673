use mockall::mock;
use vcpu8_core::soc::OutputSink;

mock! {
    pub Sink {}

    impl OutputSink for Sink {
        fn print_value(&mut self, value: u8);
        fn trace(&mut self, line: &str);
    }
}
