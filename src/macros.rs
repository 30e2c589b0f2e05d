// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! row {
    // Owned row from string-ish cells: row!["1", "100m Freestyle", ""]
    ($($cell:expr),* $(,)?) => {
        ::std::vec![$( ::std::string::String::from($cell) ),*]
    };
}
