/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, error};
use std::io::{self, BufRead};
use std::thread::Builder;

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Starts a thread that forwards operator input from stdin, one line per message.
 *
 * The thread only moves text; it never touches the simulation. When stdin
 * closes or fails the sender is dropped, which the shell sees as end of input.
 */
pub fn spawn_stdin_reader() -> io::Result<cbc::Receiver<String>> {
    let (line_tx, line_rx) = cbc::unbounded::<String>();

    Builder::new()
        .name("stdin_reader".into())
        .spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                match line {
                    Ok(line) => {
                        if line_tx.send(line).is_err() {
                            // Shell has stopped listening
                            break;
                        }
                    }
                    Err(e) => {
                        error!("Failed to read from stdin: {}", e);
                        break;
                    }
                }
            }
            debug!("stdin reader finished");
        })?;

    Ok(line_rx)
}
