//! Static site content: projects, skills and contact links

/// A gallery entry in the Projects section
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub link: &'static str,
    pub image: Option<&'static str>,
    pub tools: &'static [&'static str],
}

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "Green-Co Website",
        link: "https://green-co-git-main-mostafa-ghazals-projects.vercel.app/",
        image: Some("/projects/green.jpg"),
        tools: &["React.js", "Tailwind CSS", "TypeScript", "Zustand"],
    },
    Project {
        title: "E-Commerce Platform",
        link: "https://e-commerce-platform-mostafa-ghazals-projects.vercel.app/",
        image: Some("/projects/ecommerce.jpg"),
        tools: &["React.js", "Tailwind CSS", "Zustand"],
    },
    Project {
        title: "Gaming Cafe",
        link: "https://currency-converter-lemon-nu.vercel.app/",
        image: Some("/projects/gamingcafe.jpg"),
        tools: &["React.js", "Typescript", "Tailwind CSS", "Zustand"],
    },
    Project {
        title: "Currency Converter",
        link: "https://currency-converter-lemon-nu.vercel.app/",
        image: Some("/projects/currency.jpg"),
        tools: &["React.js", "API Integration", "Tailwind CSS"],
    },
];

/// A technology logo in the Skills grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
}

pub const SKILLS: [Skill; 12] = [
    Skill { name: "HTML5", icon: "/logos/html.png" },
    Skill { name: "CSS3", icon: "/logos/css.png" },
    Skill { name: "JavaScript", icon: "/logos/javascript.svg" },
    Skill { name: "Tailwind CSS", icon: "/logos/Tailwind.png" },
    Skill { name: "NPM", icon: "/logos/npm.svg" },
    Skill { name: "Figma", icon: "/logos/figma.png" },
    Skill { name: "React", icon: "/logos/React.png" },
    Skill { name: "TypeScript", icon: "/logos/typescript.svg" },
    Skill { name: "Zustand", icon: "/logos/zustand.svg" },
    Skill { name: "Git", icon: "/logos/git.png" },
    Skill { name: "GitHub", icon: "/logos/github.png" },
    Skill { name: "Photoshop", icon: "/logos/photoshop.png" },
];

/// Icon kinds available for contact and social links
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkIcon {
    Phone,
    WhatsApp,
    LinkedIn,
    GitHub,
    Email,
}

/// An outbound contact or social link
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: LinkIcon,
}

impl ContactLink {
    /// `tel:` and `mailto:` links are handled by the OS, not a new tab
    pub fn opens_new_tab(&self) -> bool {
        self.href.starts_with("http")
    }
}

pub const GITHUB_URL: &str = "https://github.com/MostafaGhazall";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/mostafa-ghazal-software-engineer/";
pub const EMAIL_URL: &str = "mailto:mostafaghazal210@gmail.com";

pub const CONTACT_LINKS: [ContactLink; 5] = [
    ContactLink { label: "Call", href: "tel:+0201145054551", icon: LinkIcon::Phone },
    ContactLink { label: "WhatsApp", href: "https://wa.me/+0201145054551", icon: LinkIcon::WhatsApp },
    ContactLink { label: "LinkedIn", href: LINKEDIN_URL, icon: LinkIcon::LinkedIn },
    ContactLink { label: "GitHub", href: GITHUB_URL, icon: LinkIcon::GitHub },
    ContactLink { label: "Email", href: EMAIL_URL, icon: LinkIcon::Email },
];

pub const SOCIAL_LINKS: [ContactLink; 3] = [
    ContactLink { label: "GitHub", href: GITHUB_URL, icon: LinkIcon::GitHub },
    ContactLink { label: "LinkedIn", href: LINKEDIN_URL, icon: LinkIcon::LinkedIn },
    ContactLink { label: "Email", href: EMAIL_URL, icon: LinkIcon::Email },
];

/// Navbar links as (label, section id)
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("About", "about"),
    ("Projects", "projects"),
    ("Skills", "skills"),
    ("Contact", "contact"),
];
