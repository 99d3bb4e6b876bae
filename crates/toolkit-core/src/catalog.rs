//! Tool catalog shown on the dashboard.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Dashboard category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Development,
    Design,
    Productivity,
    Marketing,
    Other,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 5] = [
        Category::Development,
        Category::Design,
        Category::Productivity,
        Category::Marketing,
        Category::Other,
    ];

    /// Identifier used in URLs and JSON.
    pub fn id(self) -> &'static str {
        match self {
            Category::Development => "development",
            Category::Design => "design",
            Category::Productivity => "productivity",
            Category::Marketing => "marketing",
            Category::Other => "other",
        }
    }

    /// Label shown to users.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Development => "Desenvolvimento",
            Category::Design => "Design",
            Category::Productivity => "Produtividade",
            Category::Marketing => "Marketing",
            Category::Other => "Outras Ferramentas",
        }
    }

    /// Tools in this category, in catalog order.
    pub fn tools(self) -> impl Iterator<Item = &'static Tool> {
        TOOLS.iter().filter(move |t| t.category == self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}

/// An external tool link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tool {
    pub name: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub category: Category,
}

const fn tool(
    name: &'static str,
    description: &'static str,
    link: &'static str,
    category: Category,
) -> Tool {
    Tool {
        name,
        description,
        link,
        category,
    }
}

use Category::{Design, Development, Marketing, Other, Productivity};

/// Every tool in the catalog.
pub static TOOLS: &[Tool] = &[
    tool("Can I use", "Compatibility tables for HTML, CSS, JS.", "https://caniuse.com/", Development),
    tool("Lorem Ipsum", "Gerador de texto.", "https://www.lipsum.com/", Development),
    tool("JSON Viewer", "Visualizador de JSON.", "http://jsonviewer.stack.hu/", Development),
    tool("JSCompress", "Minificador de JS.", "https://jscompress.com/", Development),
    tool("JS Beautifier", "Embelezador de JS.", "https://beautifier.io/", Development),
    tool("Password Generator", "Gerador de senhas.", "https://www.lastpass.com/pt/features/password-generator", Development),
    tool("QR Code Generator", "Gerador de QR Code.", "https://www.the-qrcode-generator.com/", Development),
    tool("Regex101", "Testador de Regex.", "https://regex101.com/", Development),
    tool("Canva", "Editor de imagens.", "https://www.canva.com/", Design),
    tool("Remove.bg", "Removedor de fundo de imagens.", "https://www.remove.bg/", Design),
    tool("Coolors", "Paleta de cores.", "https://coolors.co/", Design),
    tool("Unsplash", "Banco de imagens.", "https://unsplash.com/", Design),
    tool("Pexels", "Banco de vídeos.", "https://www.pexels.com/", Design),
    tool("Font Awesome", "Ícones.", "https://fontawesome.com/", Design),
    tool("Google Fonts", "Fontes.", "https://fonts.google.com/", Design),
    tool("FlatIcon", "Ícones.", "https://www.flaticon.com/", Design),
    tool("Trello", "Gerenciador de tarefas.", "https://trello.com/", Productivity),
    tool("Notion", "Workspace tudo-em-um.", "https://www.notion.so/", Productivity),
    tool("Slack", "Comunicação de equipe.", "https://slack.com/", Productivity),
    tool("Google Drive", "Armazenamento em nuvem.", "https://www.google.com/drive/", Productivity),
    tool("Dropbox", "Armazenamento em nuvem.", "https://www.dropbox.com/", Productivity),
    tool("Evernote", "Anotações.", "https://evernote.com/", Productivity),
    tool("Todoist", "Gerenciador de tarefas.", "https://todoist.com/", Productivity),
    tool("Asana", "Gerenciador de projetos.", "https://asana.com/", Productivity),
    tool("Mailchimp", "E-mail marketing.", "https://mailchimp.com/", Marketing),
    tool("Hootsuite", "Gerenciador de redes sociais.", "https://www.hootsuite.com/", Marketing),
    tool("Buffer", "Gerenciador de redes sociais.", "https://buffer.com/", Marketing),
    tool("Google Analytics", "Análise de tráfego.", "https://analytics.google.com/", Marketing),
    tool("SEMrush", "Análise de SEO.", "https://www.semrush.com/", Marketing),
    tool("Ahrefs", "Análise de SEO.", "https://ahrefs.com/", Marketing),
    tool("HubSpot", "Automação de marketing.", "https://www.hubspot.com/", Marketing),
    tool("BuzzSumo", "Análise de conteúdo.", "https://buzzsumo.com/", Marketing),
    tool("TinyPNG", "Compressor de imagens.", "https://tinypng.com/", Other),
    tool("WeTransfer", "Transferência de arquivos.", "https://wetransfer.com/", Other),
    tool("Grammarly", "Corretor ortográfico.", "https://www.grammarly.com/", Other),
    tool("Smallpdf", "Editor de PDF.", "https://smallpdf.com/", Other),
    tool("Online-convert", "Conversor de arquivos.", "https://www.online-convert.com/", Other),
    tool("Typeform", "Criador de formulários.", "https://www.typeform.com/", Other),
    tool("Calendly", "Agendador de reuniões.", "https://calendly.com/", Other),
    tool("Zapier", "Automação de tarefas.", "https://zapier.com/", Other),
];
