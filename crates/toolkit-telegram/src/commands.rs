//! Bot commands and the fixed replies they produce.

use std::fmt;

/// Material request form.
pub const MATERIAL_FORM_URL: &str = "https://forms.gle/UEqhzzLM3TGXgTbE6";

/// CTO map on Google Maps.
pub const GOOGLE_MAPS_URL: &str = "https://goo.gl/maps/88VJ2ZpSiy4F2Qas7?g_st=aw";

/// Tools dashboard.
pub const DASHBOARD_URL: &str = "https://tool-kit-one.vercel.app/";

/// QR code pointing at the dashboard.
pub const QR_CODE_IMAGE_URL: &str =
    "https://api.qrserver.com/v1/create-qr-code/?size=400x400&data=https://tool-kit-one.vercel.app/";

/// Caption of the QR code photo.
pub const QR_CODE_CAPTION: &str = "Aqui está o QR Code solicitado.";

/// Welcome and help text for `/start`.
pub const WELCOME_TEXT: &str = "Olá! Sou seu bot de assistência CTO. Use os seguintes comandos:\n\n\
    /command1 - Link para pedido de material.\n\
    /command2 - Link para o Google Maps.\n\
    /command3 - Receber a imagem do QR Code.\n\
    /command4 - Link para o painel de ferramentas.\n\
    /command5 - Ativar ou desativar os lembretes de pedido.";

/// Fallback for unknown commands.
pub const UNRECOGNIZED_TEXT: &str =
    "Comando não reconhecido. Digite /start para ver a lista de comandos disponíveis.";

/// Toggle requested from a chat with no user record.
pub const NOT_REGISTERED_TEXT: &str =
    "Você ainda não está cadastrado. Envie /start para se registrar.";

/// Toggle could not be saved.
pub const TOGGLE_FAILED_TEXT: &str =
    "Não foi possível atualizar suas preferências agora. Tente novamente em instantes.";

/// Bot commands, keyed by the first token of the message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/start`: register and show help.
    Start,
    /// `/command1`: material request form.
    MaterialForm,
    /// `/command2`: map link.
    MapLink,
    /// `/command3`: QR code photo.
    QrCode,
    /// `/command4`: dashboard link.
    Dashboard,
    /// `/command5`: flip the reminder flag.
    ToggleNotifications,
    /// Anything else, with the token as received.
    Unrecognized(String),
}

impl Command {
    /// Parses the leading token of `text`.
    ///
    /// Arguments after the token are ignored, and so is a `@botname` suffix
    /// on the token itself.
    pub fn parse(text: &str) -> Self {
        let token = text.split_whitespace().next().unwrap_or_default();
        let name = token.split('@').next().unwrap_or_default();

        match name {
            "/start" => Command::Start,
            "/command1" => Command::MaterialForm,
            "/command2" => Command::MapLink,
            "/command3" => Command::QrCode,
            "/command4" => Command::Dashboard,
            "/command5" => Command::ToggleNotifications,
            _ => Command::Unrecognized(token.to_string()),
        }
    }

    /// The command token, as a user types it.
    pub fn token(&self) -> &str {
        match self {
            Command::Start => "/start",
            Command::MaterialForm => "/command1",
            Command::MapLink => "/command2",
            Command::QrCode => "/command3",
            Command::Dashboard => "/command4",
            Command::ToggleNotifications => "/command5",
            Command::Unrecognized(token) => token,
        }
    }

    /// The canned reply of commands that never touch the directory.
    pub fn static_reply(&self) -> Option<Reply> {
        match self {
            Command::MaterialForm => Some(Reply::text(format!(
                "Aqui está o link para o pedido de material: {}",
                MATERIAL_FORM_URL
            ))),
            Command::MapLink => Some(Reply::text(format!(
                "Aqui está o link do Google Maps: {}",
                GOOGLE_MAPS_URL
            ))),
            Command::QrCode => Some(Reply::photo(QR_CODE_IMAGE_URL, QR_CODE_CAPTION)),
            Command::Dashboard => Some(Reply::text(format!(
                "Aqui está o painel de ferramentas: {}",
                DASHBOARD_URL
            ))),
            Command::Unrecognized(_) => Some(Reply::text(UNRECOGNIZED_TEXT)),
            Command::Start | Command::ToggleNotifications => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// An outbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Photo { url: String, caption: String },
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Reply::Text(text.into())
    }

    pub fn photo(url: impl Into<String>, caption: impl Into<String>) -> Self {
        Reply::Photo {
            url: url.into(),
            caption: caption.into(),
        }
    }
}

/// Confirmation sent after the reminder flag changed to `enabled`.
pub fn toggle_confirmation(enabled: bool) -> String {
    if enabled {
        "🔔 Lembretes ATIVADOS. Você receberá o aviso para fazer o pedido de material.".to_string()
    } else {
        "🔕 Lembretes DESATIVADOS. Envie /command5 para ativar novamente.".to_string()
    }
}

/// The scheduled reminder text.
pub fn reminder_text() -> String {
    format!(
        "Organize seus materiais verifique oque está faltando e não se esqueça de fazer o pedido: {}",
        MATERIAL_FORM_URL
    )
}
