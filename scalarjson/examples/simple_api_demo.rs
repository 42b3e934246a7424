// Example demonstrating the scalar parsing API

use scalarjson::{parse, ValueType};

fn main() {
    let inputs = [
        "null",
        " true ",
        "-12.5e-1",
        r#""Hello, World!""#,
        "1e1000",
        "\"unterminated",
        "1 2",
        "",
    ];

    for input in inputs {
        match parse(input) {
            Ok(value) => match value.get_type() {
                ValueType::Null => println!("{input:?} -> null"),
                ValueType::True | ValueType::False => {
                    println!("{input:?} -> bool {:?}", value.get_boolean())
                }
                ValueType::Number => println!("{input:?} -> number {:?}", value.get_number()),
                ValueType::String => println!(
                    "{input:?} -> string {:?} ({} bytes)",
                    value.as_str(),
                    value.get_string_length().unwrap_or(0)
                ),
                ValueType::Array | ValueType::Object => println!("{input:?} -> reserved"),
            },
            Err(e) => println!("{input:?} -> error: {e}"),
        }
    }
}
