use square_system::session::{Session, SessionError};
use std::io;

fn main() -> Result<(), SessionError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());
    session.run()
}
