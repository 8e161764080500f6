use std::process;

mod error;
mod logger;
mod terminal_dimensions;

fn main() {
    logger::Logger::from_env().init();

    // The diagnostic lines go out before the query result so they show
    // up whether or not a terminal is attached.
    println!("TIOCGWINSZ = {:#x}", terminal_dimensions::QUERY_COMMAND);
    println!("sizeof winsize {}", terminal_dimensions::RESULT_STRUCT_SIZE);

    match terminal_dimensions::query_terminal_size() {
        Ok(dimensions) => println!("{}", dimensions),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
