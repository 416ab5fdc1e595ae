use colored::Colorize;
use idiom_demos::phase::{Phase, Transition};

fn main() {
    pretty_env_logger::try_init_timed().ok();

    println!("{}", "Phase transitions".bold());
    for from in Phase::ALL {
        for to in Phase::ALL {
            if from == to {
                continue;
            }
            let name = match Transition::between(from, to) {
                Some(t) => t.to_string().green(),
                None => "-".dimmed(),
            };
            println!("  {:<7} -> {:<7} {}", format!("{:?}", from), format!("{:?}", to), name);
        }
    }
}
