//! Log setup.
//!
//! Records go to stderr, except while the widget owns the screen: the next
//! frame would clear them, so they are held and written out on leave.

use std::io::{self, Write};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use env_logger::{Builder, Env, Target};

static HOLD: AtomicBool = AtomicBool::new(false);
static HELD: Mutex<Vec<u8>> = Mutex::new(Vec::new());

/// stderr, or the held buffer while the screen is active.
struct HeldStderr;

impl Write for HeldStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if HOLD.load(Ordering::SeqCst) {
            let mut held = HELD
                .lock()
                .map_err(|_| io::Error::other("log buffer poisoned"))?;
            held.extend_from_slice(buf);
            Ok(buf.len())
        } else {
            io::stderr().write(buf)
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

/// Initialize from `PASSGEN_LOG` (default `warn`).
pub fn init() {
    Builder::from_env(Env::default().filter_or("PASSGEN_LOG", "warn"))
        .target(Target::Pipe(Box::new(HeldStderr)))
        .init();
}

/// Hold records until `release`.
pub fn hold() {
    HOLD.store(true, Ordering::SeqCst);
}

/// Stop holding and write out anything held.
pub fn release() {
    HOLD.store(false, Ordering::SeqCst);
    let held = match HELD.lock() {
        Ok(mut held) => std::mem::take(&mut *held),
        Err(_) => return,
    };
    if !held.is_empty() {
        let mut err = io::stderr().lock();
        let _ = err.write_all(&held);
        let _ = err.flush();
    }
}

/// Install a held logger once for the whole test binary.
#[cfg(test)]
pub fn init_for_tests() {
    use std::sync::Once;

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = Builder::new()
            .filter_level(log::LevelFilter::Warn)
            .target(Target::Pipe(Box::new(HeldStderr)))
            .try_init();
    });
    hold();
}

#[cfg(test)]
pub fn held_text() -> String {
    HELD.lock()
        .map(|held| String::from_utf8_lossy(&held).into_owned())
        .unwrap_or_default()
}
