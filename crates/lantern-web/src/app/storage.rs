use lantern_core::{
  MemoryStore,
  PreferenceStore,
  StoreError
};

/// `window.localStorage`, or a session-only map when the browser
/// refuses access (private mode, sandboxed iframes).
pub enum BrowserStore {
  Local(web_sys::Storage),
  Session(MemoryStore)
}

impl BrowserStore {
  pub fn open() -> Self {
    match web_sys::window().and_then(
      |window| {
        window
          .local_storage()
          .ok()
          .flatten()
      }
    ) {
      | Some(storage) => {
        Self::Local(storage)
      }
      | None => {
        tracing::warn!(
          "local storage unavailable; \
           theme choice lasts for this \
           session only"
        );
        Self::Session(MemoryStore::new())
      }
    }
  }
}

impl PreferenceStore for BrowserStore {
  fn get(
    &self,
    key: &str
  ) -> Option<String> {
    match self {
      | Self::Local(storage) => {
        storage
          .get_item(key)
          .ok()
          .flatten()
      }
      | Self::Session(memory) => {
        memory.get(key)
      }
    }
  }

  fn set(
    &mut self,
    key: &str,
    value: &str
  ) -> Result<(), StoreError> {
    match self {
      | Self::Local(storage) => {
        storage
          .set_item(key, value)
          .map_err(|error| {
            StoreError::Write(format!(
              "{error:?}"
            ))
          })
      }
      | Self::Session(memory) => {
        memory.set(key, value)
      }
    }
  }
}
