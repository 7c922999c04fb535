/// The single corner notification. Each `show` hands out a fresh token and
/// only the hide timer holding the latest token may dismiss it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToastSlot {
    current: u32,
    visible: bool,
}

impl ToastSlot {
    pub fn show(&mut self) -> u32 {
        self.current = self.current.wrapping_add(1);
        self.visible = true;
        self.current
    }

    /// Hide timer callback. Returns true if the toast should be hidden now.
    pub fn expire(&mut self, token: u32) -> bool {
        if self.visible && token == self.current {
            self.visible = false;
            true
        } else {
            false
        }
    }
}
