use tokio::net::TcpListener;

use crate::foundation::error::{BlueboardError, BlueboardResult};

/// Binds `host:port`, moving to the next port while the address is in use.
///
/// At most `max_attempts` ports are tried (at least one). Any other bind error fails
/// immediately.
pub async fn bind_with_retry(
    host: &str,
    port: u16,
    max_attempts: u16,
) -> BlueboardResult<TcpListener> {
    let attempts = max_attempts.max(1);
    for offset in 0..attempts {
        let Some(candidate) = port.checked_add(offset) else {
            break;
        };
        match TcpListener::bind((host, candidate)).await {
            Ok(listener) => {
                let addr = listener
                    .local_addr()
                    .map_err(|e| BlueboardError::startup(format!("local address: {e}")))?;
                tracing::info!(%addr, "listening");
                return Ok(listener);
            }
            Err(e) if e.kind() == std::io::ErrorKind::AddrInUse => {
                tracing::warn!(port = candidate, "port in use, trying the next one");
            }
            Err(e) => {
                return Err(BlueboardError::startup(format!(
                    "bind {host}:{candidate}: {e}"
                )));
            }
        }
    }
    Err(BlueboardError::startup(format!(
        "no free port on {host} starting at {port} after {attempts} attempts"
    )))
}

#[cfg(test)]
#[path = "../../tests/unit/server/listen.rs"]
mod tests;
