//! Logger forwarding all records to `tracing`.

use crate::*;

use tracing::span::EnteredSpan;



/// Default Logger implementation.
#[derive(Clone,Debug,Default)]
pub struct Logger {
    /// Dotted path of this logger.
    pub path: Rc<String>,
}

impl CloneRef for Logger {}

macro_rules! emit {
    ($level:ident $event:ident $self:ident $msg:ident) => {
        if tracing::enabled!(tracing::Level::$level) {
            $msg.with_log_msg(|s| tracing::$event!(path = %$self.path, "{}", s))
        }
    };
}

impl LoggerApi for Logger {
    type Group = EnteredSpan;

    fn new<T:Str>(path:T) -> Self {
        let path = Rc::new(path.into());
        Self {path}
    }

    fn sub<T:Str>(&self, path:T) -> Self {
        if self.path.is_empty() { Self::new(path) } else {
            Self::new(format!("{}.{}", self.path, path.as_ref()))
        }
    }

    fn group_begin<M:LogMsg>(&self, msg:M) -> EnteredSpan {
        let span = if tracing::enabled!(tracing::Level::DEBUG) {
            msg.with_log_msg(|s| tracing::debug_span!("group", path = %self.path, msg = %s))
        } else {
            tracing::Span::none()
        };
        span.entered()
    }

    fn trace<M:LogMsg>(&self, msg:M) {
        emit!(TRACE trace self msg)
    }

    fn debug<M:LogMsg>(&self, msg:M) {
        emit!(DEBUG debug self msg)
    }

    fn info<M:LogMsg>(&self, msg:M) {
        emit!(INFO info self msg)
    }

    fn warning<M:LogMsg>(&self, msg:M) {
        emit!(WARN warn self msg)
    }

    fn error<M:LogMsg>(&self, msg:M) {
        emit!(ERROR error self msg)
    }
}



// =============
// === Tests ===
// =============
