//! Hard-coded portfolio content.
//!
//! Everything the page shows lives here, so updating the portfolio is an
//! edit-and-rebuild affair. The navigation section list is derived from
//! this module and handed to the nav controller as its registry.

use crate::nav::{Section, SectionRegistry};

/// Who this portfolio belongs to.
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub email: &'static str,
    pub location: &'static str,
}

/// One position held, newest first.
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
    pub technologies: &'static [&'static str],
}

/// A shipped project card.
pub struct Project {
    pub name: &'static str,
    pub blurb: &'static str,
    pub technologies: &'static [&'static str],
    pub live_url: Option<&'static str>,
}

/// A "why me" selling point.
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

pub struct Contact {
    pub heading: &'static str,
    pub blurb: &'static str,
    pub social: &'static [SocialLink],
}

/// The whole page.
pub struct Content {
    pub profile: Profile,
    pub story: &'static [&'static str],
    pub features: &'static [Feature],
    pub experience: &'static [Experience],
    pub projects: &'static [Project],
    pub contact: Contact,
}

impl Content {
    /// The ordered section list the nav bar links to.
    pub fn sections(&self) -> Vec<Section> {
        vec![
            Section::new("hero", "Home"),
            Section::new("about", "About"),
            Section::new("why-me", "Why Me"),
            Section::new("experience", "Experience"),
            Section::new("projects", "Projects"),
            Section::new("contact", "Contact"),
        ]
    }

    pub fn registry(&self) -> SectionRegistry {
        SectionRegistry::new(self.sections())
    }
}

impl Default for Content {
    fn default() -> Self {
        Self {
            profile: Profile {
                name: "Jerome Edward Guban",
                title: "Backend Developer",
                subtitle: "Building scalable and efficient systems",
                email: "jeromeguban02@gmail.com",
                location: "Philippines",
            },
            story: &[
                "Hey there, I'm Jerome, but you can call me Edward. Started from \
                 humble beginnings to architecting scalable backend systems.",
                "6 years in the industry, and every day is still a chance to learn \
                 something new.",
                "I build systems that matter - APIs, databases, integrations, and \
                 the infrastructure behind them.",
                "Each project a new challenge, every line of code with purpose.",
                "Not just writing code, but solving real problems.",
                "From concept to deployment, making the web a better place, one \
                 commit at a time.",
                "This is my story, still being written.",
                "Let's create the next chapter together.",
            ],
            features: &[
                Feature {
                    icon: "*",
                    title: "Years of Excellence",
                    blurb: "Six years of shipping production systems, from retail \
                            e-commerce to HR platforms, with the scars and the \
                            judgement to show for it.",
                },
                Feature {
                    icon: "</>",
                    title: "Backend Expertise",
                    blurb: "APIs, queues, search, caching and the databases \
                            underneath - designed for the day traffic triples.",
                },
                Feature {
                    icon: "##",
                    title: "Team Player",
                    blurb: "Code reviews, pairing, end-user training sessions. \
                            Systems are built by teams, not heroes.",
                },
                Feature {
                    icon: "~>",
                    title: "Modern Tech Stack",
                    blurb: "Always current with the ecosystem, adopting tools \
                            when they earn their place rather than when they \
                            trend.",
                },
            ],
            experience: &[
                Experience {
                    role: "Mid Backend Developer",
                    company: "Electro Premier Venture Inc Intl",
                    period: "2024 - Present",
                    summary: "Developed and implemented web-based applications to \
                              enhance business processes. Designed, deployed and \
                              maintained an HRIS for employee data, payroll and \
                              leave tracking, a virtual calling card system, and \
                              an inventory management system for stock tracking, \
                              procurement and reporting.",
                    technologies: &[
                        "Laravel", "PHP", "MySQL", "Vue.js", "React.js", "Node.js",
                        "REST APIs", "Git", "Scrum",
                    ],
                },
                Experience {
                    role: "Backend Developer",
                    company: "HMR Philippines Inc. (Retail | Auction)",
                    period: "2019 - 2024",
                    summary: "Implemented DevOps practices across development \
                              workflows and CI/CD. Integrated back-end services \
                              and databases for smooth data flow, maintained \
                              e-commerce platforms with online bidding, warehouse \
                              management and reporting tools, integrated CRM \
                              systems, and led training sessions for end users.",
                    technologies: &[
                        "Laravel", "PHP", "MySQL", "Vue.js", "Node.js", "REST APIs",
                        "Git", "DevOps", "Elasticsearch", "Redis",
                    ],
                },
            ],
            projects: &[
                Project {
                    name: "HMR Shop N' Bid",
                    blurb: "E-commerce and online bidding website for HMR \
                            Philippines Inc.",
                    technologies: &[
                        "Laravel", "PHP", "MySQL", "Vue.js", "Elasticsearch",
                        "Redis", "Tailwind", "Node.js", "Cron",
                    ],
                    live_url: Some("https://hmr.ph"),
                },
                Project {
                    name: "Hammer 3.0",
                    blurb: "Warehouse management system handling the business' \
                            entire inventory and operations.",
                    technologies: &["Laravel", "PHP", "MySQL", "Vue.js", "Redis", "Cron"],
                    live_url: None,
                },
                Project {
                    name: "HMR CMS",
                    blurb: "Content management system for Shop N' Bid.",
                    technologies: &["Laravel", "PHP", "MySQL", "Vue.js", "Redis", "Elasticsearch"],
                    live_url: None,
                },
                Project {
                    name: "HMR Forms",
                    blurb: "A form builder in the spirit of Google Forms.",
                    technologies: &["Laravel", "PHP", "MySQL", "Vue.js", "Redis"],
                    live_url: None,
                },
                Project {
                    name: "Overlanders 2.0",
                    blurb: "Warehouse management system.",
                    technologies: &["Laravel", "PHP", "MySQL", "Vue.js", "Redis"],
                    live_url: None,
                },
                Project {
                    name: "Seller Platform",
                    blurb: "Seller-facing platform for HMR Shop N' Bid.",
                    technologies: &["Laravel", "PHP", "MySQL", "Vue.js", "Redis"],
                    live_url: None,
                },
                Project {
                    name: "Simulcast Auction",
                    blurb: "Live auction controller for Shop N' Bid, built on \
                            WebRTC and Ant Media Server.",
                    technologies: &["Laravel", "Vue.js", "Redis", "WebRTC", "WebSockets"],
                    live_url: None,
                },
                Project {
                    name: "Live Selling",
                    blurb: "Live selling controller for Shop N' Bid, built on \
                            WebRTC and Ant Media Server.",
                    technologies: &["Laravel", "Vue.js", "Redis", "WebRTC", "WebSockets"],
                    live_url: None,
                },
                Project {
                    name: "Recherche E-commerce",
                    blurb: "E-commerce website for Recherche.",
                    technologies: &["Laravel", "PHP", "MySQL", "React.js", "Tailwind"],
                    live_url: Some("https://recherche.com.ph"),
                },
                Project {
                    name: "Recherche CMS",
                    blurb: "Content management system for the Recherche store.",
                    technologies: &["Laravel", "PHP", "MySQL", "Vue.js", "Tailwind"],
                    live_url: None,
                },
                Project {
                    name: "HRIS System",
                    blurb: "Human resource information system for Electro Premier \
                            Venture.",
                    technologies: &["Laravel", "PHP", "MySQL", "Vue.js", "Tailwind"],
                    live_url: None,
                },
                Project {
                    name: "Virtual Calling Card",
                    blurb: "Virtual calling card system for Electro Premier \
                            Venture.",
                    technologies: &["React.js", "Tailwind", "REST APIs"],
                    live_url: None,
                },
                Project {
                    name: "Inventory Management",
                    blurb: "Inventory management system for Electro Premier \
                            Venture.",
                    technologies: &["Laravel", "PHP", "MySQL", "Vue.js", "Tailwind"],
                    live_url: None,
                },
            ],
            contact: Contact {
                heading: "Get In Touch",
                blurb: "I'm always open to discussing new projects, creative \
                        ideas, or opportunities to be part of your vision.",
                social: &[
                    SocialLink {
                        name: "LinkedIn",
                        url: "https://linkedin.com/in/jeromeguban",
                    },
                    SocialLink {
                        name: "Facebook",
                        url: "https://facebook.com/jeromeguban",
                    },
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_are_unique() {
        let content = Content::default();
        let sections = content.sections();
        for (i, a) in sections.iter().enumerate() {
            for b in sections.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn sections_have_labels() {
        let content = Content::default();
        assert!(content.sections().iter().all(|s| !s.label.is_empty()));
    }

    #[test]
    fn content_is_populated() {
        let content = Content::default();
        assert_eq!(content.experience.len(), 2);
        assert_eq!(content.projects.len(), 13);
        assert_eq!(content.features.len(), 4);
        assert!(!content.story.is_empty());
    }
}
