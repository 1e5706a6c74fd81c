use arboard::Clipboard as SystemClipboard;

/// System clipboard handle, opened on first use. A failed copy drops the
/// handle so the next copy reconnects.
#[derive(Default)]
pub struct Clipboard {
    inner: Option<SystemClipboard>,
}

impl Clipboard {
    pub fn new() -> Self {
        Clipboard::default()
    }

    pub fn copy(&mut self, text: &str) -> Result<(), arboard::Error> {
        let clipboard = match self.inner.as_mut() {
            Some(clipboard) => clipboard,
            None => self.inner.insert(SystemClipboard::new()?),
        };
        if let Err(e) = clipboard.set_text(text.to_owned()) {
            self.inner = None;
            return Err(e);
        }
        Ok(())
    }
}
