mod quarter;
mod renderer;
#[cfg(test)]
mod tests;

pub use renderer::write_report;
