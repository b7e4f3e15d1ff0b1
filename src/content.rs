//! Static portfolio content: project case studies, work experience and the
//! about text. The window manager treats all of this as opaque read-only
//! data; the only structure it relies on is the fixed ordering of
//! `PROJECTS`, which drives the case-study previous/next navigation.

use indoc::indoc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub background: &'static str,
    pub content: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: "1",
        title: "Case Study 1",
        description: "Product Analytics Dashboard",
        image: "images/case1.png",
        tags: &["Analytics", "Dashboard", "UX"],
        background: indoc! {"
            This project was initiated to address the growing need for
            comprehensive product analytics in our SaaS platform. The existing
            reporting system was fragmented and difficult to navigate, leading
            to poor data-driven decision making across product teams.
        "},
        content: indoc! {"
            The solution involved designing and implementing a unified
            analytics dashboard that consolidated key metrics from multiple
            data sources, with intuitive visualizations that let product
            managers quickly identify trends and opportunities.

            - Real-time data visualization
            - Customizable dashboard layouts
            - Advanced filtering and segmentation
            - Automated report generation
            - Mobile-responsive design

            The result was a 40% improvement in decision-making speed and
            increased engagement with analytics tools.
        "},
    },
    Project {
        id: "2",
        title: "Case Study 2",
        description: "E-commerce Platform",
        image: "images/case2.png",
        tags: &["E-commerce", "Strategy", "Data"],
        background: indoc! {"
            A mid-sized retail company asked for a redesign of their
            e-commerce platform. The existing solution had a high bounce rate
            and low conversion, particularly on mobile, and customers were
            frustrated with checkout and product discovery.
        "},
        content: indoc! {"
            Extensive user research and competitive analysis surfaced the pain
            points in the customer journey; the redesign streamlined the
            experience and optimized for mobile-first interactions.

            - Simplified navigation structure
            - One-page checkout process
            - Enhanced search and filtering
            - Personalized product recommendations
            - Improved page load speeds

            Post-launch metrics showed a 65% increase in conversion rates and
            a 45% reduction in cart abandonment.
        "},
    },
    Project {
        id: "3",
        title: "Case Study 3",
        description: "Mobile App Design",
        image: "images/case3.png",
        tags: &["Mobile", "UI/UX", "Product"],
        background: indoc! {"
            A fitness startup needed a companion app for their wearable
            device: syncing with multiple trackers, personalized workout
            plans, and a social community around fitness goals.
        "},
        content: indoc! {"
            The design process involved interviews with fitness enthusiasts
            and collaboration with trainers, prioritizing ease of use without
            giving up depth.

            - Multi-device synchronization
            - AI-powered workout recommendations
            - Social features and challenges
            - Progress tracking and analytics
            - Nutrition logging and guidance

            The app launched with over 10,000 downloads in the first month
            and held a 4.8-star store rating.
        "},
    },
    Project {
        id: "4",
        title: "Case Study 4",
        description: "Data Visualization",
        image: "images/case4.png",
        tags: &["Data Viz", "Analytics", "Strategy"],
        background: indoc! {"
            A financial services company required an advanced visualization
            platform so analysts could identify market trends and risks; the
            incumbent tools could not handle the volume and complexity of
            modern financial data.
        "},
        content: indoc! {"
            The platform processes large datasets in real time and presents
            complex financial information in an intuitive format, under
            strict regulatory requirements.

            - Real-time data processing
            - Interactive charting
            - Customizable dashboard components
            - Advanced statistical analysis tools
            - Compliance-ready reporting

            Analysis time dropped by 60% and risk-assessment accuracy
            improved by 35%.
        "},
    },
];

/// Look up a project by its id, returning the list index alongside it.
pub fn project_by_id(id: &str) -> Option<(usize, &'static Project)> {
    PROJECTS
        .iter()
        .enumerate()
        .find(|(_, project)| project.id == id)
}

#[derive(Debug, Clone, Copy)]
pub struct ExperienceEntry {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

pub const EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        role: "Systems Analyst",
        company: "PSA International",
        period: "May 2025 - Present",
        highlights: &[
            "Improved logistics apps with 6+ feature enhancements and 15+ bug fixes",
            "Led end-to-end UAT with enterprise clients, 95% first-pass approval",
            "Accelerated release cycles by 40% through optimized CI/CD pipelines",
        ],
    },
    ExperienceEntry {
        role: "Business Intelligence Engineer",
        company: "United Visual Researchers (Paris)",
        period: "Aug 2024 - Jan 2025",
        highlights: &[
            "Revamped data strategy and built a full-stack reporting system",
            "Ad-hoc reporting recovered over 10,000 EUR in tax credits",
            "RPA and analytics dashboards cut reporting time by 30%",
        ],
    },
    ExperienceEntry {
        role: "Data Product Analyst",
        company: "SPH Media",
        period: "May 2024 - Aug 2024",
        highlights: &[
            "Led Tableau Server-to-Cloud migration, 12,000 USD monthly saving",
            "Migrated 100+ dashboards, self-service analytics for 300 users",
            "Implemented governance protocols and access controls",
        ],
    },
    ExperienceEntry {
        role: "Product Operations",
        company: "Shopee",
        period: "May 2023 - Aug 2023",
        highlights: &[
            "Drove roadmaps for 4 analytics projects, +5% conversion",
            "Precision/recall analysis improved search relevancy 15% across 8 markets",
            "Automation brought a 30% efficiency gain for the team",
        ],
    },
];

pub const OWNER_NAME: &str = "Minh Phong";

pub const ABOUT_TITLE: &str = "hi, i'm Minh Phong\na Product Analyst\nbased in Singapore";

pub const ABOUT_SEEKING: &str =
    "Seeking full-time new grad opportunities in Product, Data, Strategy & Ops";

pub const ABOUT_BODY: &str = indoc! {"
    In my final semester as an ASEAN Scholar studying Information Systems
    at NUS, driven by a passion for HCI and building meaningful products.
    I chose this path to learn about both tech and users.

    Previously interned at PSA International, Shopee, and SPH Media. Also
    completed a startup internship in Paris under the NUS Overseas
    Colleges (NOC) program :)
"};

/// Track listing shown by the playlist panel. Static chrome only; actual
/// playback is out of scope.
pub const PLAYLIST_NAME: &str = "focus mix";

pub const PLAYLIST_TRACKS: &[(&str, &str)] = &[
    ("Midnight City", "M83"),
    ("Intro", "The xx"),
    ("Nuvole Bianche", "Ludovico Einaudi"),
    ("Holocene", "Bon Iver"),
    ("Night Owl", "Galimatias"),
    ("Cold Little Heart", "Michael Kiwanuka"),
    ("Bloom", "ODESZA"),
];
