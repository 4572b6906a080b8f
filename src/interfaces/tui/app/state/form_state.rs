//! 表单焦点管理
//!
//! 登录、注册、缩短链接三个弹窗共用一个焦点游标

/// Focused input of the open form.
///
/// `slots` may exceed the form's text fields: the shorten form has one
/// extra slot for its "permanent" checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormFocus {
    pub index: usize,
    pub slots: usize,
}

impl FormFocus {
    pub fn new(slots: usize) -> Self {
        Self { index: 0, slots }
    }

    /// 切换到下一个字段
    pub fn next(&mut self) {
        if self.slots > 0 {
            self.index = (self.index + 1) % self.slots;
        }
    }

    /// 切换到上一个字段
    pub fn prev(&mut self) {
        if self.slots > 0 {
            self.index = (self.index + self.slots - 1) % self.slots;
        }
    }

    pub fn is(&self, index: usize) -> bool {
        self.index == index
    }
}
