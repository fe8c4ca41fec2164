/// Anything the engine can drive: a named unit whose `run` reports success.
pub trait Runnable {
    fn name(&self) -> &str;
    fn run(&self) -> bool;
}
