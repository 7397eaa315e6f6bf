use argslot::{Binder, ParameterSlot, Schema};

const USAGE: &str = "/greeter hello <-s salutation> <name> [times]";

fn main() {
    let schema = match Schema::compile(USAGE) {
        Ok(schema) => schema,
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    };

    // Names are greeted as written, but trimmed of surrounding whitespace.
    let binder = Binder::new(&schema).processor(|_: &ParameterSlot, value: &str| {
        Some(value.trim().to_string())
    });
    let invocation = binder.parse(std::env::args().skip(1));

    if !invocation.is_valid() {
        eprintln!("usage: {USAGE}");
        std::process::exit(1);
    }

    let salutation = invocation
        .arguments()
        .value_flag("s")
        .map(|flag| flag.raw_value().to_string())
        .unwrap_or_default();
    let name = invocation.raw_param("name").unwrap_or_default();
    let times = match invocation.param("times") {
        Some(times) => match times.value().as_int() {
            Ok(times) => times,
            Err(error) => {
                eprintln!("Parse error: {error}");
                std::process::exit(1);
            }
        },
        None => 1,
    };

    for _ in 0..times {
        println!("{salutation}, {name}!");
    }
}
