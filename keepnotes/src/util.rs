pub trait StrExt: AsRef<str> {
    fn is_blank(&self) -> bool {
        self.as_ref().trim().is_empty()
    }
}

impl<T: AsRef<str>> StrExt for T {}

#[macro_export]
macro_rules! error_exit {
    ($($arg:tt)+) => ({
        log::error!($($arg)+);
        std::process::exit(1)
    });
}
