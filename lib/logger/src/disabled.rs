use crate::*;



/// Trivial logger that discards all the messages.
#[derive(Clone,Copy,Debug,Default)]
pub struct Logger();

impl CloneRef for Logger {}

impl From<enabled::Logger> for Logger {
    fn from(_:enabled::Logger) -> Self { Logger() }
}

impl From<&enabled::Logger> for Logger {
    fn from(_:&enabled::Logger) -> Self { Logger() }
}

impl LoggerApi for Logger {
    type Group = ();

    fn new<T: Str>(_:T) -> Self {
        Logger()
    }

    fn sub<T:Str>(&self, _:T) -> Logger {
        Logger()
    }

    fn group<M: LogMsg,T,F:FnOnce() -> T>(&self, _:M, f:F) -> T {
        f()
    }

    fn group_begin<M: LogMsg>(&self, _:M) {}
    fn trace      <M: LogMsg>(&self, _:M) {}
    fn debug      <M: LogMsg>(&self, _:M) {}
    fn info       <M: LogMsg>(&self, _:M) {}
    fn warning    <M: LogMsg>(&self, _:M) {}
    fn error      <M: LogMsg>(&self, _:M) {}
}
