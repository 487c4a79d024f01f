use super::{
    AriaLabels, ContactInfo, EducationItem, ExperienceItem, ResumeData, SkillCategory, SkillLevel,
    UiLabels,
};

pub static DATA_PT: ResumeData = ResumeData {
    name: "Andherson Moura",
    role: "Engenheiro de Software Front-end",
    summary: &[
        "Engenheiro de software com mais de 8 anos construindo produtos web de ponta a ponta, do design system ao deploy.",
        "Gosto de transformar requisitos confusos em interfaces simples, rápidas e acessíveis, sempre perto do time de produto.",
    ],
    contact: CONTACT,
    experience: &[
        ExperienceItem {
            company: "Nuvem Pay",
            role: "Engenheiro Front-end Sênior",
            period: "2022 - Atual",
            location: "São Paulo, SP (Remoto)",
            summary: &[
                "Liderei a migração do checkout para Next.js, reduzindo o tempo de carregamento em 40%.",
                "Criei o design system interno usado por seis squads, com testes visuais automatizados.",
            ],
            tech_stack: &["React", "Next.js", "TypeScript", "Storybook", "Playwright"],
            is_locked: false,
        },
        ExperienceItem {
            company: "Loja Conecta",
            role: "Desenvolvedor Full Stack",
            period: "2019 - 2022",
            location: "Campinas, SP",
            summary: &[
                "Desenvolvi o painel do lojista e as APIs de catálogo que atendem mais de 3 mil lojas.",
                "Implantei pipelines de CI/CD e monitoramento, derrubando incidentes em produção pela metade.",
            ],
            tech_stack: &["React", "Node.js", "PostgreSQL", "Docker", "AWS"],
            is_locked: false,
        },
        ExperienceItem {
            company: "Agência Pixel",
            role: "Desenvolvedor Front-end",
            period: "2017 - 2019",
            location: "Campinas, SP",
            summary: &[
                "Entreguei sites institucionais e landing pages responsivas para mais de 30 clientes.",
            ],
            tech_stack: &["JavaScript", "Sass", "WordPress", "Gulp"],
            is_locked: false,
        },
        ExperienceItem {
            company: "Supermercados Bom Preço",
            role: "Supervisor de Loja",
            period: "2012 - 2017",
            location: "Campinas, SP",
            summary: &[
                "Coordenei uma equipe de 15 pessoas, escalas de turno e o atendimento ao cliente.",
                "Foi aqui que aprendi a negociar prazos, lidar com pressão e ouvir quem está na ponta.",
            ],
            tech_stack: &["Liderança", "Atendimento", "Gestão de estoque"],
            is_locked: true,
        },
    ],
    education: &[
        EducationItem {
            institution: "Universidade Estadual de Campinas",
            degree: "Bacharelado em Sistemas de Informação",
            period: "2015 - 2019",
        },
        EducationItem {
            institution: "Alura",
            degree: "Formação em Acessibilidade Web",
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
            title: "Linguagens & Frameworks",
            skills: &["TypeScript", "JavaScript", "React", "Next.js", "Node.js", "Rust"],
        },
        SkillCategory {
            title: "Arquitetura & Infraestrutura",
            skills: &["Micro-frontends", "REST", "GraphQL", "Docker", "AWS", "CI/CD"],
        },
        SkillCategory {
            title: "Qualidade & Testes",
            skills: &["Jest", "Testing Library", "Playwright", "Storybook", "WCAG"],
        },
        SkillCategory {
            title: "Pessoas & Produto",
            skills: &["Mentoria", "Discovery", "Scrum", "Comunicação"],
        },
    ],
    radar: &[
        SkillLevel { subject: "Arquitetura", level: 100 },
        SkillLevel { subject: "React/Next.js", level: 100 },
        SkillLevel { subject: "Liderança", level: 90 },
        SkillLevel { subject: "DevOps", level: 80 },
        SkillLevel { subject: "QA", level: 90 },
        SkillLevel { subject: "Produto", level: 100 },
        SkillLevel { subject: "UI/UX", level: 90 },
        SkillLevel { subject: "Backend", level: 70 },
    ],
    ui: UiLabels {
        greeting: "Olá, eu sou",
        about: "Sobre",
        experience: "Experiência",
        skills: "Habilidades",
        education: "Formação",
        contact: "Contato",
        achievements: "Conquistas",
        philosophy_title: "Filosofia de trabalho",
        philosophy_desc: "Software bom é o que resolve o problema certo, é fácil de mudar e funciona para todas as pessoas.",
        radar_title: "Mapa de competências",
        get_in_touch: "Fale comigo",
        locked_notice: "Experiência fora da área de tecnologia",
        unlock: "Desbloquear",
        rights_reserved: "Todos os direitos reservados.",
        page_title: "Portfólio",
        not_found: "Página não encontrada.",
    },
    aria_labels: AriaLabels {
        skip_to_content: "Pular para o conteúdo principal",
        navigate_to_section: "Ir para a seção",
        change_language: "Mudar idioma",
        current_language: "Idioma atual",
        send_email: "Enviar e-mail para",
        open_whats_app: "Abrir conversa no WhatsApp com",
        open_linked_in: "Abrir perfil no LinkedIn",
        open_instagram: "Abrir perfil no Instagram",
        open_github: "Abrir perfil no GitHub",
        contact_links: "Links de contato",
        location: "Localização",
        unlock_experiences: "Desbloquear experiência fora da área de tecnologia",
        experience_timeline: "Linha do tempo de experiências profissionais",
        technologies_used: "Tecnologias utilizadas",
        education_list: "Lista de formações",
        social_links: "Redes sociais",
        chart_description: "Gráfico radar com o nível de domínio em:",
        chart_data: "Dados do gráfico de competências",
        skills_categories: "Categorias de habilidades",
        skills_in_category: "Habilidades em",
        main_navigation: "Navegação principal",
        back_to_top: "Voltar ao topo",
        open_menu: "Abrir menu",
        close_menu: "Fechar menu",
        mobile_navigation: "Navegação móvel",
        personal_presentation: "Apresentação pessoal",
        sr_chart_description: "Nível de domínio por competência",
        category_label: "Competência",
        level_label: "Nível",
    },
};

const CONTACT: ContactInfo = ContactInfo {
    phone: "+55 11 91234-5678",
    email: "contato@andherson.dev",
    linkedin: "https://www.linkedin.com/in/andherson-moura",
    location: "São Paulo, Brasil",
    instagram: "https://www.instagram.com/andherson.dev",
    github: "https://github.com/andhersonmoura",
};
