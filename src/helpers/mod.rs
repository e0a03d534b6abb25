pub mod handler_404;
pub mod retry;

#[cfg(test)]
pub mod fake_upstream;
