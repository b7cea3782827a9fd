use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    adhikarana::apps::run_rebuild(std::env::args().skip(1))
}
