use colored::Colorize;
use idiom_demos::min;
use idiom_demos::varargs::min_of;

fn main() {
    pretty_env_logger::try_init_timed().ok();

    match min!(1, 2, 3) {
        Ok(value) => println!("min!(1, 2, 3) = {}", value.to_string().green()),
        Err(err) => println!("min!(1, 2, 3) failed: {}", err.to_string().red()),
    }

    match min!() {
        Ok(value) => println!("min!() = {}", value),
        Err(err) => println!("min!() failed: {}", err.to_string().red()),
    }

    println!("min_of(4, &[9, -2, 7]) = {}", min_of(4, &[9, -2, 7]).to_string().green());
}
