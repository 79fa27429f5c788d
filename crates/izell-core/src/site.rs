//! Static site content.
//!
//! Everything the pages display lives here as plain data: hero slides,
//! services, company stats, the project portfolio and contact details.
//! The TUI layer renders these; it never defines content of its own.

/// Company constants shown in the navigation bar, footer and contact page.
pub const COMPANY_NAME: &str = "Izell Interiors";
pub const COMPANY_TAGLINE: &str =
    "Professional interior fit-out, MEP and civil maintenance company based in UAE";
pub const COMPANY_PHONE: &str = "+971 50 123 4567";
pub const COMPANY_EMAIL: &str = "info@izellinteriors.com";
pub const COMPANY_LOCATION: &str = "Dubai, United Arab Emirates";
pub const COMPANY_WEBSITE: &str = "https://www.izellinteriors.com";
pub const COMPANY_HOURS: &str = "Mon-Fri 8:00-18:00, Sat 9:00-16:00";

/// One slide of the home-page hero carousel.
#[derive(Debug, Clone, Copy)]
pub struct HeroSlide {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
}

pub static HERO_SLIDES: [HeroSlide; 3] = [
    HeroSlide {
        title: "Transform Your Space",
        subtitle: "Complete Turnkey Interior Solutions",
        description: "End-to-end customized fit-out solutions across UAE for all \
                      segments of industry and retail requirements",
    },
    HeroSlide {
        title: "Professional Excellence",
        subtitle: "Cost Effective & Convenient Services",
        description: "Professional interior fit-out, MEP and civil maintenance \
                      company based in UAE",
    },
    HeroSlide {
        title: "Quality & Innovation",
        subtitle: "Residential & Commercial Solutions",
        description: "Working on both residential and commercial platforms with \
                      exceptional quality and safety",
    },
];

/// A service offering listed on the home page.
#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
}

pub static SERVICES: [Service; 5] = [
    Service {
        title: "Refurbishment & Renovations",
        description: "Complete refurbishment and renovation services for \
                      residential and commercial spaces",
        features: [
            "Space Planning",
            "Interior Upgrades",
            "Bathroom Renovations",
            "Kitchen Remodeling",
        ],
    },
    Service {
        title: "Design & Build",
        description: "End-to-end design and construction services from concept \
                      to completion",
        features: [
            "Architectural Design",
            "3D Visualization",
            "Project Planning",
            "Construction Management",
        ],
    },
    Service {
        title: "Carpentry & Joinery Work",
        description: "Custom carpentry and joinery solutions with precision \
                      craftsmanship",
        features: [
            "Custom Furniture",
            "Built-in Storage",
            "Wooden Fixtures",
            "Cabinet Making",
        ],
    },
    Service {
        title: "MEP Services & AMCs",
        description: "Comprehensive mechanical, electrical, plumbing services \
                      and annual maintenance contracts",
        features: [
            "Electrical Installation",
            "Plumbing Systems",
            "HVAC Solutions",
            "Maintenance Contracts",
        ],
    },
    Service {
        title: "Civil Works",
        description: "Professional civil construction and maintenance services \
                      with quality assurance",
        features: [
            "Structural Work",
            "Flooring Solutions",
            "Wall Finishing",
            "General Construction",
        ],
    },
];

/// One step of the consult/design/execute approach row.
#[derive(Debug, Clone, Copy)]
pub struct ApproachStep {
    pub title: &'static str,
    pub description: &'static str,
}

pub static APPROACH: [ApproachStep; 3] = [
    ApproachStep {
        title: "Consult",
        description: "Understanding your vision and requirements",
    },
    ApproachStep {
        title: "Design",
        description: "Creating detailed plans and visualizations",
    },
    ApproachStep {
        title: "Execute",
        description: "Professional delivery with quality assurance",
    },
];

/// An achievement counter on the about page. `target` is the value the
/// animated counter climbs to.
#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub label: &'static str,
    pub target: u32,
    pub suffix: &'static str,
}

pub static STATS: [Stat; 4] = [
    Stat { label: "Projects Completed", target: 200, suffix: "+" },
    Stat { label: "Client Satisfaction", target: 98, suffix: "%" },
    Stat { label: "Years in UAE", target: 15, suffix: "+" },
    Stat { label: "Happy Clients", target: 150, suffix: "+" },
];

pub static STORY: [&str; 3] = [
    "Izell Interiors is a professional interior fit-out, MEP and civil \
     maintenance company based in UAE with an aim to provide customers with \
     cost-effective and convenient services in all aspects. We are working on \
     both residential and commercial platforms across the Emirates.",
    "We provide an end-to-end and comprehensive range of customized fit-out \
     solutions across UAE for all segments of industry and retail \
     requirements including offices, hospitals and clinics, supermarkets, \
     cafeterias, retail shops, and residential villas and apartments.",
    "We ensure that every minute aspect of the project is crafted to meet our \
     clients' requirements with our team of professionals. We strive to \
     deliver projects on time, cost-effectively and with an exceptional level \
     of quality and safety.",
];

pub static WHY_CHOOSE_US: [&str; 6] = [
    "Professional team with 15+ years experience",
    "Cost-effective and convenient services",
    "Complete turnkey solutions",
    "On-time project delivery",
    "Quality assurance and safety standards",
    "MEP and civil maintenance expertise",
];

/// Delivery state of a portfolio project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Completed,
    InProgress,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "In Progress",
        }
    }
}

/// One entry of the project portfolio.
#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub client: &'static str,
    pub location: &'static str,
    pub area: &'static str,
    pub year: &'static str,
    pub status: ProjectStatus,
    pub description: &'static str,
    pub credit: &'static str,
}

pub static PROJECTS: [Project; 8] = [
    Project {
        title: "Corporate Office Complex",
        category: "Office Fit Out",
        client: "Business Tower Dubai",
        location: "Dubai, UAE",
        area: "5,000 sqft",
        year: "2024",
        status: ProjectStatus::Completed,
        description: "Modern corporate office with state-of-the-art facilities \
                      and contemporary design",
        credit: "Design & Execution by Izell Interiors",
    },
    Project {
        title: "Modern Medical Center",
        category: "Hospital & Clinic",
        client: "Dubai Health Center",
        location: "Abu Dhabi, UAE",
        area: "8,000 sqft",
        year: "2024",
        status: ProjectStatus::Completed,
        description: "Advanced medical facility with specialized equipment \
                      installation and MEP services",
        credit: "Complete Fit-out by Izell Interiors",
    },
    Project {
        title: "Premium Supermarket",
        category: "Retail & Supermarket",
        client: "Fresh Market UAE",
        location: "Sharjah, UAE",
        area: "12,000 sqft",
        year: "2023",
        status: ProjectStatus::Completed,
        description: "Large-scale retail space with modern refrigeration and \
                      display systems",
        credit: "Design & Build by Izell Interiors",
    },
    Project {
        title: "Luxury Villa Interior",
        category: "Residential Villa",
        client: "Private Villa Dubai",
        location: "Dubai, UAE",
        area: "6,500 sqft",
        year: "2023",
        status: ProjectStatus::Completed,
        description: "Elegant villa interior with custom joinery and premium \
                      finishes",
        credit: "Complete Interior by Izell Interiors",
    },
    Project {
        title: "Modern Restaurant",
        category: "Restaurant & Cafe",
        client: "Gourmet Dining Dubai",
        location: "Dubai, UAE",
        area: "3,500 sqft",
        year: "2023",
        status: ProjectStatus::Completed,
        description: "Contemporary restaurant with professional kitchen setup \
                      and ambient lighting",
        credit: "Fit-out & MEP by Izell Interiors",
    },
    Project {
        title: "Contemporary Apartment",
        category: "Residential Apartment",
        client: "Downtown Residence",
        location: "Dubai, UAE",
        area: "2,200 sqft",
        year: "2024",
        status: ProjectStatus::Completed,
        description: "Modern apartment interior with smart home integration \
                      and custom storage solutions",
        credit: "Interior Design by Izell Interiors",
    },
    Project {
        title: "Educational Institution",
        category: "School & University",
        client: "Dubai International School",
        location: "Dubai, UAE",
        area: "15,000 sqft",
        year: "2023",
        status: ProjectStatus::Completed,
        description: "Modern educational facility with interactive learning \
                      spaces and advanced technology",
        credit: "Complete Fit-out by Izell Interiors",
    },
    Project {
        title: "Retail Showroom",
        category: "Retail & Showroom",
        client: "Luxury Brands Outlet",
        location: "Dubai, UAE",
        area: "4,000 sqft",
        year: "2024",
        status: ProjectStatus::InProgress,
        description: "High-end retail showroom with premium display systems \
                      and lighting",
        credit: "Design & Execution by Izell Interiors",
    },
];

/// Category tabs of the project gallery, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Office,
    Medical,
    Retail,
    Restaurant,
    Residential,
    Education,
}

impl CategoryFilter {
    pub const ALL_FILTERS: [CategoryFilter; 7] = [
        CategoryFilter::All,
        CategoryFilter::Office,
        CategoryFilter::Medical,
        CategoryFilter::Retail,
        CategoryFilter::Restaurant,
        CategoryFilter::Residential,
        CategoryFilter::Education,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All Projects",
            CategoryFilter::Office => "Office",
            CategoryFilter::Medical => "Medical",
            CategoryFilter::Retail => "Retail",
            CategoryFilter::Restaurant => "Restaurant",
            CategoryFilter::Residential => "Residential",
            CategoryFilter::Education => "Education",
        }
    }

    /// Keywords matched against a project's category string.
    fn keywords(self) -> &'static [&'static str] {
        match self {
            CategoryFilter::All => &[],
            CategoryFilter::Office => &["office"],
            CategoryFilter::Medical => &["hospital", "clinic"],
            CategoryFilter::Retail => &["retail", "supermarket"],
            CategoryFilter::Restaurant => &["restaurant", "cafe"],
            CategoryFilter::Residential => &["residential", "villa", "apartment"],
            CategoryFilter::Education => &["school", "university"],
        }
    }

    /// Whether `project` belongs to this category tab.
    pub fn matches(self, project: &Project) -> bool {
        if self == CategoryFilter::All {
            return true;
        }
        let category = project.category.to_lowercase();
        self.keywords().iter().any(|kw| category.contains(kw))
    }

    /// Number of portfolio projects under this tab, shown as a badge.
    pub fn count(self) -> usize {
        PROJECTS.iter().filter(|p| self.matches(p)).count()
    }

    pub fn next(self) -> CategoryFilter {
        let idx = Self::ALL_FILTERS.iter().position(|&f| f == self).unwrap_or(0);
        Self::ALL_FILTERS[(idx + 1) % Self::ALL_FILTERS.len()]
    }

    pub fn prev(self) -> CategoryFilter {
        let len = Self::ALL_FILTERS.len();
        let idx = Self::ALL_FILTERS.iter().position(|&f| f == self).unwrap_or(0);
        Self::ALL_FILTERS[(idx + len - 1) % len]
    }
}

/// Indices into `PROJECTS` matching the active category tab and a
/// case-insensitive search over title, client and location.
pub fn filter_projects(filter: CategoryFilter, query: &str) -> Vec<usize> {
    let query = query.to_lowercase();
    PROJECTS
        .iter()
        .enumerate()
        .filter(|(_, p)| filter.matches(p))
        .filter(|(_, p)| {
            query.is_empty()
                || p.title.to_lowercase().contains(&query)
                || p.client.to_lowercase().contains(&query)
                || p.location.to_lowercase().contains(&query)
        })
        .map(|(i, _)| i)
        .collect()
}

/// A way to reach the company, shown as contact cards and in the footer.
#[derive(Debug, Clone, Copy)]
pub struct ContactChannel {
    pub label: &'static str,
    pub details: [&'static str; 2],
    pub description: &'static str,
}

pub static CONTACT_CHANNELS: [ContactChannel; 4] = [
    ContactChannel {
        label: "Phone",
        details: ["+971 50 123 4567", "+971 4 567 8900"],
        description: "Call us for immediate assistance",
    },
    ContactChannel {
        label: "Email",
        details: ["info@izellinteriors.com", "projects@izellinteriors.com"],
        description: "Send us your requirements",
    },
    ContactChannel {
        label: "Office Location",
        details: ["Dubai, United Arab Emirates", "Serving across UAE"],
        description: "Visit our office or we can come to you",
    },
    ContactChannel {
        label: "Working Hours",
        details: ["Mon - Fri: 8:00 AM - 6:00 PM", "Sat: 9:00 AM - 4:00 PM"],
        description: "We're here when you need us",
    },
];

/// Project-type choices offered by the contact form.
pub static PROJECT_TYPES: [&str; 10] = [
    "Interior Fit-Out",
    "MEP Services",
    "Civil Maintenance",
    "Office Renovation",
    "Residential Interior",
    "Commercial Projects",
    "Hospital & Clinic Fit-out",
    "Restaurant & Cafe Setup",
    "Retail Store Design",
    "Other",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_filter_counts_everything() {
        assert_eq!(CategoryFilter::All.count(), PROJECTS.len());
    }

    #[test]
    fn category_counts_match_portfolio() {
        assert_eq!(CategoryFilter::Office.count(), 1);
        assert_eq!(CategoryFilter::Medical.count(), 1);
        assert_eq!(CategoryFilter::Retail.count(), 2);
        assert_eq!(CategoryFilter::Restaurant.count(), 1);
        assert_eq!(CategoryFilter::Residential.count(), 2);
        assert_eq!(CategoryFilter::Education.count(), 1);
    }

    #[test]
    fn filter_cycling_wraps() {
        assert_eq!(CategoryFilter::Education.next(), CategoryFilter::All);
        assert_eq!(CategoryFilter::All.prev(), CategoryFilter::Education);
    }

    #[test]
    fn search_matches_title_client_and_location() {
        let by_title = filter_projects(CategoryFilter::All, "villa");
        assert!(by_title
            .iter()
            .any(|&i| PROJECTS[i].title == "Luxury Villa Interior"));

        let by_client = filter_projects(CategoryFilter::All, "fresh market");
        assert_eq!(by_client.len(), 1);
        assert_eq!(PROJECTS[by_client[0]].title, "Premium Supermarket");

        let by_location = filter_projects(CategoryFilter::All, "sharjah");
        assert_eq!(by_location.len(), 1);
    }

    #[test]
    fn search_is_case_insensitive() {
        assert_eq!(
            filter_projects(CategoryFilter::All, "DUBAI").len(),
            filter_projects(CategoryFilter::All, "dubai").len()
        );
    }

    #[test]
    fn search_composes_with_category() {
        // "dubai" matches many projects, but only one under the Medical tab.
        let medical = filter_projects(CategoryFilter::Medical, "dubai");
        assert_eq!(medical.len(), 1);
        assert_eq!(PROJECTS[medical[0]].title, "Modern Medical Center");
    }

    #[test]
    fn empty_query_returns_whole_category() {
        assert_eq!(
            filter_projects(CategoryFilter::Residential, "").len(),
            CategoryFilter::Residential.count()
        );
    }

    #[test]
    fn no_match_returns_empty() {
        assert!(filter_projects(CategoryFilter::All, "warehouse").is_empty());
    }
}
