use super::{
    AriaLabels, ContactInfo, EducationItem, ExperienceItem, ResumeData, SkillCategory, SkillLevel,
    UiLabels,
};

pub static DATA_EN: ResumeData = ResumeData {
    name: "Andherson Moura",
    role: "Front-end Software Engineer",
    summary: &[
        "Software engineer with 8+ years building web products end to end, from the design system to the deploy.",
        "I enjoy turning fuzzy requirements into simple, fast and accessible interfaces, working close to the product team.",
    ],
    contact: CONTACT,
    experience: &[
        ExperienceItem {
            company: "Nuvem Pay",
            role: "Senior Front-end Engineer",
            period: "2022 - Present",
            location: "São Paulo, Brazil (Remote)",
            summary: &[
                "Led the checkout migration to Next.js, cutting load time by 40%.",
                "Built the internal design system used by six squads, backed by automated visual tests.",
            ],
            tech_stack: &["React", "Next.js", "TypeScript", "Storybook", "Playwright"],
            is_locked: false,
        },
        ExperienceItem {
            company: "Loja Conecta",
            role: "Full Stack Developer",
            period: "2019 - 2022",
            location: "Campinas, Brazil",
            summary: &[
                "Developed the merchant dashboard and catalog APIs serving over 3,000 stores.",
                "Rolled out CI/CD pipelines and monitoring, halving production incidents.",
            ],
            tech_stack: &["React", "Node.js", "PostgreSQL", "Docker", "AWS"],
            is_locked: false,
        },
        ExperienceItem {
            company: "Agência Pixel",
            role: "Front-end Developer",
            period: "2017 - 2019",
            location: "Campinas, Brazil",
            summary: &["Shipped responsive corporate sites and landing pages for more than 30 clients."],
            tech_stack: &["JavaScript", "Sass", "WordPress", "Gulp"],
            is_locked: false,
        },
        ExperienceItem {
            company: "Bom Preço Supermarkets",
            role: "Store Supervisor",
            period: "2012 - 2017",
            location: "Campinas, Brazil",
            summary: &[
                "Coordinated a 15-person team, shift schedules and customer service.",
                "This is where I learned to negotiate deadlines, handle pressure and listen to the people on the front line.",
            ],
            tech_stack: &["Leadership", "Customer service", "Inventory management"],
            is_locked: true,
        },
    ],
    education: &[
        EducationItem {
            institution: "University of Campinas",
            degree: "B.Sc. in Information Systems",
            period: "2015 - 2019",
        },
        EducationItem {
            institution: "Alura",
            degree: "Web Accessibility Track",
            period: "2021",
        },
        EducationItem {
            institution: "AWS",
            degree: "AWS Certified Cloud Practitioner",
            period: "2023",
        },
    ],
    skill_categories: &[
        SkillCategory {
            title: "Languages & Frameworks",
            skills: &["TypeScript", "JavaScript", "React", "Next.js", "Node.js", "Rust"],
        },
        SkillCategory {
            title: "Architecture & Infrastructure",
            skills: &["Micro-frontends", "REST", "GraphQL", "Docker", "AWS", "CI/CD"],
        },
        SkillCategory {
            title: "Quality & Testing",
            skills: &["Jest", "Testing Library", "Playwright", "Storybook", "WCAG"],
        },
        SkillCategory {
            title: "People & Product",
            skills: &["Mentoring", "Discovery", "Scrum", "Communication"],
        },
    ],
    radar: &[
        SkillLevel { subject: "Architecture", level: 100 },
        SkillLevel { subject: "React/Next.js", level: 100 },
        SkillLevel { subject: "Leadership", level: 90 },
        SkillLevel { subject: "DevOps", level: 80 },
        SkillLevel { subject: "QA", level: 90 },
        SkillLevel { subject: "Product", level: 100 },
        SkillLevel { subject: "UI/UX", level: 90 },
        SkillLevel { subject: "Backend", level: 70 },
    ],
    ui: UiLabels {
        greeting: "Hi, I'm",
        about: "About",
        experience: "Experience",
        skills: "Skills",
        education: "Education",
        contact: "Contact",
        achievements: "Achievements",
        philosophy_title: "Working philosophy",
        philosophy_desc: "Good software solves the right problem, is easy to change and works for everyone.",
        radar_title: "Skill map",
        get_in_touch: "Get in touch",
        locked_notice: "Experience outside the tech field",
        unlock: "Unlock",
        rights_reserved: "All rights reserved.",
        page_title: "Portfolio",
        not_found: "Page not found.",
    },
    aria_labels: AriaLabels {
        skip_to_content: "Skip to main content",
        navigate_to_section: "Go to section",
        change_language: "Change language",
        current_language: "Current language",
        send_email: "Send an email to",
        open_whats_app: "Open a WhatsApp chat with",
        open_linked_in: "Open LinkedIn profile",
        open_instagram: "Open Instagram profile",
        open_github: "Open GitHub profile",
        contact_links: "Contact links",
        location: "Location",
        unlock_experiences: "Unlock experience outside the tech field",
        experience_timeline: "Professional experience timeline",
        technologies_used: "Technologies used",
        education_list: "Education list",
        social_links: "Social links",
        chart_description: "Radar chart showing proficiency in:",
        chart_data: "Skill chart data",
        skills_categories: "Skill categories",
        skills_in_category: "Skills in",
        main_navigation: "Main navigation",
        back_to_top: "Back to top",
        open_menu: "Open menu",
        close_menu: "Close menu",
        mobile_navigation: "Mobile navigation",
        personal_presentation: "Personal presentation",
        sr_chart_description: "Proficiency level per skill",
        category_label: "Skill",
        level_label: "Level",
    },
};

const CONTACT: ContactInfo = ContactInfo {
    phone: "+55 11 91234-5678",
    email: "contato@andherson.dev",
    linkedin: "https://www.linkedin.com/in/andherson-moura",
    location: "São Paulo, Brazil",
    instagram: "https://www.instagram.com/andherson.dev",
    github: "https://github.com/andhersonmoura",
};
