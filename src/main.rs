extern crate clap;
extern crate pretty_env_logger;
extern crate termcolor;
extern crate tokio;

use clap::{crate_description, crate_name, value_parser, Arg, ArgAction, ArgMatches, Command};
use pretty_env_logger::init_timed;
use std::{io::Write, path::PathBuf, process};
use termcolor::{Color, ColorChoice, StandardStream, WriteColor};
use uva::{cache::Paths, error::Result};

#[macro_use]
mod color;
mod command {
    pub mod problem;
    pub mod session;
    pub mod submit;
    pub mod test;
}
mod read;
mod write;

fn problem_id() -> Arg {
    Arg::new("id")
        .help("Problem id, e.g. 100")
        .required(true)
        .value_parser(value_parser!(u32))
}
fn source_file() -> Arg {
    Arg::new("file")
        .help("Source file named <id>.<title>.<ext>")
        .required(true)
        .value_parser(value_parser!(PathBuf))
}

fn cli() -> Command {
    Command::new(crate_name!())
        .about(crate_description!())
        .version(get_version!("version"))
        .long_version(get_version!("long_version"))
        .subcommand_required(true)
        .subcommand(
            Command::new("user")
                .about("Show, log in or log out the current user")
                .arg(
                    Arg::new("login")
                        .short('l')
                        .long("login")
                        .help("Log in to the judge")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("logout")
                        .short('L')
                        .long("logout")
                        .help("Forget the saved login")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("login"),
                ),
        )
        .subcommand(
            Command::new("show")
                .about("Show a problem statement")
                .arg(problem_id())
                .arg(
                    Arg::new("gui")
                        .short('g')
                        .long("gui")
                        .help("Open the pdf in a viewer")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("touch")
                .about("Create a source file for a problem")
                .arg(problem_id())
                .arg(
                    Arg::new("lang")
                        .long("lang")
                        .help("File extension of the language")
                        .default_value("cc"),
                ),
        )
        .subcommand(
            Command::new("submit")
                .about("Submit a solution and wait for the verdict")
                .arg(source_file()),
        )
        .subcommand(
            Command::new("test")
                .about("Test a solution against the sample test data")
                .arg(source_file())
                .arg(
                    Arg::new("input")
                        .short('i')
                        .long("input")
                        .help("Print the input data")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn id_of(m: &ArgMatches) -> u32 {
    *m.get_one::<u32>("id").expect("id is required")
}
fn file_of(m: &ArgMatches) -> &PathBuf {
    m.get_one::<PathBuf>("file").expect("file is required")
}

async fn dispatch(stdout: &mut StandardStream, paths: &Paths, matches: &ArgMatches) -> Result<()> {
    use command::{problem, session, submit, test};
    match matches.subcommand() {
        Some(("user", m)) => {
            if m.get_flag("login") {
                session::login(stdout, paths).await
            } else if m.get_flag("logout") {
                session::logout(stdout, paths)
            } else {
                session::whoami(stdout, paths)
            }
        }
        Some(("show", m)) => problem::show(stdout, paths, id_of(m), m.get_flag("gui")).await,
        Some(("touch", m)) => {
            let lang = m.get_one::<String>("lang").expect("lang has a default");
            problem::touch(stdout, paths, id_of(m), lang).await
        }
        Some(("submit", m)) => submit::submit(stdout, paths, file_of(m)).await,
        Some(("test", m)) => test::test(stdout, paths, file_of(m), m.get_flag("input")).await,
        _ => unreachable!("subcommand is required"),
    }
}

#[allow(unused_must_use)]
#[tokio::main]
async fn main() {
    init_timed();
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let matches = cli().get_matches();
    let result = match Paths::from_env() {
        Ok(paths) => dispatch(&mut stdout, &paths, &matches).await,
        Err(e) => Err(e),
    };
    stdout.reset();
    if let Err(e) = result {
        write_error!(&mut stdout, "Error", "{}", e);
        stdout.reset();
        process::exit(1);
    }
}
