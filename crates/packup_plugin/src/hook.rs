use std::borrow::Cow;

use derivative::Derivative;
use packup_error::Result;

pub type TapName = Cow<'static, str>;

#[derive(Derivative)]
#[derivative(Debug)]
struct Tap {
  name: TapName,
  #[derivative(Debug = "ignore")]
  callback: Box<dyn Fn() -> Result<()> + Send + Sync>,
}

/// A named synchronous multicast point. Taps run in registration order on
/// the calling thread; subscriber failures are not isolated, the first tap
/// error aborts the call and with it the build.
#[derive(Derivative, Default)]
#[derivative(Debug)]
pub struct SyncHook {
  taps: Vec<Tap>,
}

impl SyncHook {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn tap(
    &mut self,
    name: impl Into<TapName>,
    callback: impl Fn() -> Result<()> + Send + Sync + 'static,
  ) {
    self.taps.push(Tap {
      name: name.into(),
      callback: Box::new(callback),
    });
  }

  pub fn call(&self) -> Result<()> {
    for tap in &self.taps {
      (tap.callback)().map_err(|err| err.context(format!("tap: {}", tap.name)))?;
    }
    Ok(())
  }

  pub fn is_tapped(&self) -> bool {
    !self.taps.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use std::sync::{Arc, Mutex};

  use packup_error::format_err;

  use super::*;

  #[test]
  fn taps_run_in_registration_order() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let mut hook = SyncHook::new();
    for name in ["first", "second", "third"] {
      let calls = calls.clone();
      hook.tap(name, move || {
        calls.lock().unwrap().push(name);
        Ok(())
      });
    }
    hook.call().unwrap();
    assert_eq!(*calls.lock().unwrap(), vec!["first", "second", "third"]);
  }

  #[test]
  fn first_error_stops_later_taps() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let mut hook = SyncHook::new();
    {
      let calls = calls.clone();
      hook.tap("ok", move || {
        calls.lock().unwrap().push("ok");
        Ok(())
      });
    }
    hook.tap("boom", || Err(format_err!("boom").into()));
    {
      let calls = calls.clone();
      hook.tap("after", move || {
        calls.lock().unwrap().push("after");
        Ok(())
      });
    }
    assert!(hook.call().is_err());
    assert_eq!(*calls.lock().unwrap(), vec!["ok"]);
  }
}
