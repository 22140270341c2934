use courier_contracts::{Recipient, RecipientError, async_trait};
use parking_lot::Mutex;
use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ping(pub u32);

/// Shared call log, in the order recipients were entered.
#[derive(Debug, Default)]
pub struct CallLog(Mutex<Vec<&'static str>>);

impl CallLog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.0.lock().clone()
    }

    fn push(&self, name: &'static str) {
        self.0.lock().push(name);
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Behaviour {
    Succeed,
    Fail,
    Panic,
    Stall(Duration),
}

#[derive(Debug)]
pub struct Probe {
    name: &'static str,
    behaviour: Behaviour,
    log: Arc<CallLog>,
}

impl Probe {
    pub fn new(name: &'static str, behaviour: Behaviour, log: &Arc<CallLog>) -> Arc<Self> {
        Arc::new(Self { name, behaviour, log: Arc::clone(log) })
    }

    pub fn ok(name: &'static str, log: &Arc<CallLog>) -> Arc<Self> {
        Self::new(name, Behaviour::Succeed, log)
    }

    pub fn failing(name: &'static str, log: &Arc<CallLog>) -> Arc<Self> {
        Self::new(name, Behaviour::Fail, log)
    }
}

#[async_trait]
impl Recipient<Ping> for Probe {
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed(self.name)
    }

    async fn notify(&self, _message: &Ping) -> Result<(), RecipientError> {
        self.log.push(self.name);
        match self.behaviour {
            Behaviour::Succeed => Ok(()),
            Behaviour::Fail => Err(RecipientError::unavailable(format!("{} is down", self.name))),
            Behaviour::Panic => panic!("{} exploded", self.name),
            Behaviour::Stall(delay) => {
                tokio::time::sleep(delay).await;
                Ok(())
            },
        }
    }
}

pub fn recipients(probes: &[Arc<Probe>]) -> Vec<Arc<dyn Recipient<Ping>>> {
    probes.iter().map(|p| Arc::clone(p) as Arc<dyn Recipient<Ping>>).collect()
}
