/**
 * Foresee
 * Copyright (C) 2026 The Foresee developers
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

use std::env;
use std::error::Error;
use std::process;

use getopts::Options;
use tracing_subscriber::EnvFilter;

use foresee::io;
use foresee::loader::{Loader, DEFAULT_MIN_USERS, DEFAULT_SEPARATOR};

fn main() {

    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optopt("i", "inputfile", "Input file name (required). The input consists of ratings, \
        one UserID::MovieID::Rating::Timestamp record per line.", "PATH");
    opts.optopt("s", "separator", "Field separator (optional, defaults to '::').", "SEP");
    opts.optopt("m", "min-users", "Minimum number of distinct users (optional, defaults to 20).",
        "NUMBER");
    opts.optopt("o", "outputfile", "Output file for the dataset statistics in JSON format \
        (optional, output will be written to stdout by default).", "PATH");
    opts.optopt("e", "export", "Export the ratings as tab-separated user/item/rating rows to the \
        given file (optional).", "PATH");
    opts.optflag("v", "verbose", "Enable verbose output");
    opts.optflag("h", "help", "Print this help menu");

    let matches = match opts.parse(&args[1..]) {
        Ok(matches) => matches,
        Err(failure) => {
            let hint = failure.to_string();
            return print_usage_and_exit(&program, opts, Some(&hint), 2)
        },
    };

    if matches.opt_present("h") {
        return print_usage_and_exit(&program, opts, None, 0);
    }

    let ratings_path = match matches.opt_str("i") {
        Some(path) => path,
        None => {
            return print_usage_and_exit(
                &program,
                opts,
                Some("Please specify an inputfile via --inputfile."),
                2,
            );
        },
    };

    let min_users: usize = match matches.opt_get_default("m", DEFAULT_MIN_USERS) {
        Ok(min_users) => min_users,
        Err(failure) => {
            let hint = format!("Problem with option 'm': {}", failure.to_string());
            return print_usage_and_exit(&program, opts, Some(&hint), 2)
        },
    };

    let separator = matches.opt_str("s").unwrap_or_else(|| DEFAULT_SEPARATOR.to_string());
    let stats_path = matches.opt_str("o");
    let export_path = matches.opt_str("e");

    init_logging(matches.opt_present("v"));

    let loader = Loader::with_file(&ratings_path, &separator).min_users(min_users);

    if let Err(failure) = load_and_report(&loader, stats_path, export_path) {
        eprintln!("Error: {}", failure);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage_and_exit(
    program: &str,
    opts: Options,
    hint: Option<&str>,
    exit_code: i32,
) {

    let brief = format!("Usage: {} [options]", program);

    if exit_code == 0 {
        print!("{}", opts.usage(&brief));
    } else {
        if let Some(hint) = hint {
            eprintln!("\n{}\n", hint);
        }
        eprint!("{}", opts.usage(&brief));
    }

    process::exit(exit_code);
}

fn load_and_report(
    loader: &Loader,
    stats_path: Option<String>,
    export_path: Option<String>,
) -> Result<(), Box<dyn Error>> {

    if let Some(path) = loader.get_dataset_file() {
        eprintln!("Reading ratings from {}", path.display());
    }

    let dataset = loader.load()?;

    eprintln!(
        "Found {} ratings between {} users and {} items.",
        dataset.num_ratings(),
        dataset.users_count(),
        dataset.items_count(),
    );

    io::write_stats(&dataset, stats_path)?;

    if export_path.is_some() {
        eprintln!("Exporting ratings...");
        io::write_interactions(&dataset, export_path)?;
    }

    Ok(())
}
