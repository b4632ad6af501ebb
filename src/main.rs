use treemap::cli::{self, ResolvedAction};
use treemap::{output, render};

fn main() {
    let action = match cli::resolve_arguments(std::env::args_os()) {
        Ok(action) => action,
        Err(err) => err.exit(),
    };

    match action {
        ResolvedAction::ShowVersion => println!("{}", cli::VERSION),
        ResolvedAction::ShowHelp => print!("{}", cli::help_text()),
        ResolvedAction::Render(config) => {
            output::print_direction_warning(config.direction());
            let report = render::render(&config);
            output::print_report(&report);
        }
    }
}
