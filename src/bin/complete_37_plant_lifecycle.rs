use colored::Colorize;
use idiom_demos::config::DemoConfig;
use idiom_demos::plant::{
    group_by_enum_map, group_by_ordinal, group_by_stream, group_into_sets, LifeCycle, Plant,
};
use idiom_demos::Result;
use itertools::Itertools;
use std::collections::BTreeSet;

fn show<'a>(plants: impl IntoIterator<Item = &'a Plant>) -> String {
    format!("[{}]", plants.into_iter().join(", "))
}

fn main() -> Result<()> {
    pretty_env_logger::try_init_timed().ok();
    let garden = DemoConfig::load()?.plants();

    println!("{}", "1. Array indexed by ordinal".bold());
    let by_ordinal = group_by_ordinal(&garden);
    for life_cycle in LifeCycle::ALL {
        println!("  {} : {}", life_cycle, show(&by_ordinal[life_cycle as usize]));
    }

    println!("{}", "2. Map pre-filled with every life cycle".bold());
    for (life_cycle, plants) in group_by_enum_map(&garden) {
        println!("  {} : {}", life_cycle, show(&plants));
    }

    println!("{}", "3. Iterator grouping".bold());
    for (life_cycle, plants) in group_by_stream(&garden).into_iter().sorted_by_key(|(k, _)| *k) {
        println!("  {} : {}", life_cycle, show(&plants));
    }

    println!("{}", "4. Iterator grouping into sets".bold());
    for (life_cycle, plants) in group_into_sets(&garden) {
        println!("  {} : {}", life_cycle, show(&plants));
    }

    let missing: BTreeSet<LifeCycle> = LifeCycle::ALL
        .into_iter()
        .filter(|lc| garden.iter().all(|p| p.life_cycle != *lc))
        .collect();
    if !missing.is_empty() {
        println!(
            "{}",
            format!("Only form 1 and 2 list {}", missing.iter().join(", ")).yellow()
        );
    }

    Ok(())
}
