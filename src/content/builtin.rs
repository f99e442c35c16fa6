use crate::content::model::{
    AboutSection, AssetPath, CapabilityTile, IconRef, PortfolioSection, ProjectEntry, SiteContent,
};

fn tile(label: &str, description: &str, icon: &str) -> CapabilityTile {
    CapabilityTile {
        label: label.to_owned(),
        description: description.to_owned(),
        icon: Some(IconRef::new(icon)),
        variant: None,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

impl SiteContent {
    /// The content shipped with the site: four capability tiles and three projects.
    pub fn builtin() -> Self {
        Self {
            about: AboutSection {
                heading: "About Us".to_owned(),
                intro: strings(&[
                    "We design and build digital products end to end, from the first sketch to \
                     the production rollout.",
                    "Small senior team, short feedback loops, and software that keeps working \
                     after launch.",
                ]),
                tiles: vec![
                    tile(
                        "Web Development",
                        "Fast, accessible sites and web apps built on modern frameworks.",
                        "code",
                    ),
                    tile(
                        "Mobile Apps",
                        "Native-feeling iOS and Android apps from a single codebase.",
                        "smartphone",
                    ),
                    tile(
                        "UI/UX Design",
                        "Research-driven interfaces that people understand at first glance.",
                        "palette",
                    ),
                    tile(
                        "Cloud & DevOps",
                        "Infrastructure, pipelines and monitoring that scale with you.",
                        "cloud",
                    ),
                ],
            },
            portfolio: PortfolioSection {
                heading: "Our Work".to_owned(),
                intro: strings(&["A selection of recent projects."]),
                projects: vec![
                    ProjectEntry {
                        title: "Storefront Platform".to_owned(),
                        description: "Headless commerce platform serving a catalogue of 40k \
                                      products across three regions."
                            .to_owned(),
                        image: Some(AssetPath::new("/images/projects/storefront.png")),
                        features: strings(&[
                            "Sub-second product search",
                            "Multi-currency checkout",
                            "Inventory sync with warehouse systems",
                        ]),
                        tech_tags: strings(&["React", "Node.js", "PostgreSQL", "Redis"]),
                        icon: Some(IconRef::new("shopping-cart")),
                        variant: None,
                    },
                    ProjectEntry {
                        title: "Clinic Scheduler".to_owned(),
                        description: "Appointment booking and reminders for a network of \
                                      outpatient clinics."
                            .to_owned(),
                        image: Some(AssetPath::new("/images/projects/clinic.png")),
                        features: strings(&[
                            "Real-time slot availability",
                            "SMS and email reminders",
                            "Role-based staff dashboard",
                        ]),
                        tech_tags: strings(&["Flutter", "Firebase", "TypeScript"]),
                        icon: Some(IconRef::new("calendar")),
                        variant: None,
                    },
                    ProjectEntry {
                        title: "Fleet Analytics".to_owned(),
                        description: "Telemetry ingestion and reporting for a logistics fleet \
                                      of 2,000 vehicles."
                            .to_owned(),
                        image: Some(AssetPath::new("/images/projects/fleet.png")),
                        features: strings(&[
                            "Streaming GPS ingestion",
                            "Fuel and route efficiency reports",
                            "Anomaly alerts",
                        ]),
                        tech_tags: strings(&["Rust", "Kafka", "ClickHouse", "Grafana"]),
                        icon: Some(IconRef::new("truck")),
                        variant: None,
                    },
                ],
            },
        }
    }
}
