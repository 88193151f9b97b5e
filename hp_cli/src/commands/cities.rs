use hp_core::types::city::{self, DEFAULT_CITY};

pub fn handle() {
    println!("city\n======");
    for name in city::all() {
        if *name == DEFAULT_CITY {
            println!("{} (default)", name);
        } else {
            println!("{}", name);
        }
    }
}
