use plitedb_probe::get_version;

fn main() {
    match get_version() {
        Ok(version) => println!("{}", version),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
