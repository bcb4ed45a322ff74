use std::{env::args, process::exit};

use commission_handler::reader::get_filename;
use commission_handler::run;

fn main() {
    let filename = match get_filename(args().collect()) {
        Ok(filename) => filename,
        Err(err) => {
            eprintln!("{}", err);
            exit(1)
        }
    };

    if let Err(err) = run(filename) {
        eprintln!("{}", err);
        exit(1)
    }
}
