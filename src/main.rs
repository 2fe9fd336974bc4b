use inquiry::app::App;
use inquiry::gateway::HttpGateway;
use inquiry::logging;
use inquiry::terminal::{Terminal, TerminalEvent};
use std::io;
use std::sync::Arc;
use std::time::Duration;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
    }
}

fn run() -> io::Result<()> {
    logging::init()?;

    let mut terminal = Terminal::new()?;
    terminal.enter()?;

    let result = event_loop(&mut terminal);

    terminal.leave()?;
    result
}

fn event_loop(terminal: &mut Terminal) -> io::Result<()> {
    let mut app = App::new(Arc::new(HttpGateway::new()));

    let mut render_requested = true;

    loop {
        if terminal.poll(Duration::from_millis(100))? {
            match terminal.read_event()? {
                TerminalEvent::Key(key_event) => {
                    app.handle_key(key_event);
                    render_requested = true;
                }
                TerminalEvent::Resize { .. } => {
                    render_requested = true;
                }
            }
        }

        if app.tick() {
            render_requested = true;
        }

        if render_requested {
            app.render(terminal)?;
            render_requested = false;
        }

        if app.should_exit() {
            break;
        }
    }

    Ok(())
}
