//! Static copy and links rendered by the landing page.

pub const WHATSAPP_PHONE: &str = "5519997882182";
pub const WHATSAPP_MESSAGE: &str = "Olá! Vim pela sua página e gostaria de mais informações!";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/obonvento/";
pub const INSTAGRAM_HANDLE: &str = "@obonvento";

pub const LOGO_SRC: &str = "/logo.svg";
pub const DIRECTOR_PHOTO_SRC: &str = "/matteo.png";
pub const HERO_VIDEO_SRC: &str =
    "https://assets.mixkit.co/videos/preview/mixkit-set-of-plateaus-seen-from-above-in-a-rocky-landscape-44456-large.mp4";
pub const GRAIN_TEXTURE_URL: &str = "https://grainy-gradients.vercel.app/noise.svg";

pub const MARQUEE_TEXT: &str = "DIRECTED BY MATTEO • DIRECTED BY MATTEO • DIRECTED BY MATTEO •";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortfolioItem {
    pub title: &'static str,
    pub tag: &'static str,
    pub link: &'static str,
    pub thumbnail: &'static str,
}

pub const PORTFOLIO_ITEMS: &[PortfolioItem] = &[
    PortfolioItem {
        title: "Aftermovie",
        tag: "MIZA DJ",
        link: "https://www.instagram.com/p/DVRaqz4kc1l/s",
        thumbnail: "/perfil-miza.png",
    },
    PortfolioItem {
        title: "Filmagem Evento",
        tag: "MIZA DJ",
        link: "https://www.instagram.com/p/DVRZ0OPDsrK/",
        thumbnail: "/Miza.png",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStep {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        id: "01",
        title: "Briefing Estratégico",
        description: "Entendimento da marca e público-alvo.",
    },
    ProcessStep {
        id: "02",
        title: "Direção Visual",
        description: "Planejamento de narrativa e estética cinematográfica.",
    },
    ProcessStep {
        id: "03",
        title: "Captura High-End",
        description: "Qualidade Visual Avançada e Técnica apurada.",
    },
    ProcessStep {
        id: "04",
        title: "Pós-Produção",
        description: "Edição, color grading e sound design imersivo.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    /// Element id of the target section, without the `#`.
    pub anchor: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Produções", anchor: "portfolio" },
    NavLink { label: "Processo", anchor: "processo" },
    NavLink { label: "Direção", anchor: "contato" },
];

/// WhatsApp deep link with the greeting pre-filled.
pub fn whatsapp_link() -> String {
    format!(
        "https://wa.me/{}?text={}",
        WHATSAPP_PHONE,
        urlencoding::encode(WHATSAPP_MESSAGE)
    )
}
