pub mod help;
pub mod search;

use tracing::debug;

use crate::dashboard::Dashboard;

/// What the input loop should do after a line was handled
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Dispatch one line of terminal input. Anything that is not a `:` command
/// is a ticker search, including an empty line.
pub async fn handle_line(dashboard: &mut Dashboard, line: &str) -> Flow {
    let command = line.trim();
    debug!("Input: {:?}", command);

    match command.to_lowercase().as_str() {
        ":quit" | ":q" | ":exit" => return Flow::Quit,
        ":help" | ":h" => {
            println!("{}", help::usage());
            return Flow::Continue;
        }
        ":refresh" | ":r" => dashboard.load().await,
        _ => search::execute(dashboard, command).await,
    }

    println!("{}", dashboard.render());
    Flow::Continue
}
