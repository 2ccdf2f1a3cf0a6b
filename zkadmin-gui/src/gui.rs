use std::sync::Arc;

use iced::{Length, Task};
use tracing::{error, info};

use zkadmin_ui::{
    theme,
    widget::{Container, Element},
};

use crate::{
    app::{self, WalletStatus},
    connector::Connector,
    VERSION,
};

/// Application shell: owns the only wallet status panel and hands it the
/// connector built at startup.
pub struct GUI {
    panel: WalletStatus,
}

#[derive(Debug, Clone)]
pub enum Message {
    CtrlC,
    Panel(app::Message),
}

impl From<app::Message> for Message {
    fn from(value: app::Message) -> Self {
        Self::Panel(value)
    }
}

async fn ctrl_c() -> Result<(), ()> {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("{}", e);
    };
    info!("Signal received, exiting");
    Ok(())
}

impl GUI {
    pub fn title(&self) -> String {
        format!("ZK Admin v{}", VERSION)
    }

    pub fn new(connector: Arc<dyn Connector + Send + Sync>) -> (GUI, Task<Message>) {
        info!("Using wallet connector: {}", connector.name());
        (
            Self {
                panel: WalletStatus::new(connector),
            },
            Task::perform(ctrl_c(), |_| Message::CtrlC),
        )
    }

    pub fn panel(&self) -> &WalletStatus {
        &self.panel
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CtrlC => iced::window::get_latest().and_then(iced::window::close),
            Message::Panel(msg) => self.panel.update(msg).map(Message::Panel),
        }
    }

    pub fn view(&self) -> Element<Message> {
        Container::new(self.panel.view().map(Message::Panel))
            .padding(40)
            .center_x(Length::Fill)
            .height(Length::Fill)
            .style(theme::container::background)
            .into()
    }

    pub fn scale_factor(&self) -> f64 {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::mock::MockConnector;

    #[test]
    fn shell_routes_messages_to_panel() {
        let (mut gui, _) = GUI::new(Arc::new(MockConnector::new("0x00")));
        assert!(gui.title().starts_with("ZK Admin v"));
        let _ = gui.update(Message::from(app::Message::SelectAll));
        assert_eq!(gui.panel().selection().len(), 6);
        let _ = gui.update(app::Message::SelectAsset(0).into());
        assert_eq!(gui.panel().selection().len(), 5);
    }
}
