// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literal, const, &String or String
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // String-type concatenation shorthand!
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

#[macro_export]
macro_rules! cols {
    // Ordered (key, value) cells for one table row:
    //   cols!["date" => date, "bet_id" => &id]
    ($($key:expr => $val:expr),* $(,)?) => {
        ::std::vec![ $( ($key, ::std::string::String::from($val)) ),* ]
    };
}
