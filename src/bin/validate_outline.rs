use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    adhikarana::apps::run_validate(std::env::args().skip(1))
}
