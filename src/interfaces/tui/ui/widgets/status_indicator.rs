//! 链接状态徽标
//!
//! 表格和详情弹窗共用的状态颜色

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::interfaces::tui::constants::colors;
use crate::presentation::UrlStatus;

pub struct StatusIndicator {
    status: UrlStatus,
}

impl StatusIndicator {
    pub fn new(status: UrlStatus) -> Self {
        Self { status }
    }

    /// 获取状态颜色
    pub fn color(&self) -> Color {
        match self.status {
            UrlStatus::Expired => colors::ERROR,
            UrlStatus::Permanent => Color::Magenta,
            UrlStatus::Active => colors::SUCCESS,
        }
    }

    /// 获取状态样式
    pub fn style(&self) -> Style {
        let style = Style::default().fg(self.color());
        if self.status == UrlStatus::Expired {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    pub fn span(&self) -> Span<'static> {
        Span::styled(self.status.label(), self.style())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_colors() {
        assert_eq!(StatusIndicator::new(UrlStatus::Expired).color(), colors::ERROR);
        assert_eq!(StatusIndicator::new(UrlStatus::Active).color(), colors::SUCCESS);
        assert_eq!(
            StatusIndicator::new(UrlStatus::Permanent).span().content,
            UrlStatus::Permanent.label()
        );
    }
}
