//! Fixed probe inputs.
//!
//! Evidence sets answer one query about employee wellness programs. Each set
//! holds two relevant passages (comprehensive and moderate programs) and three
//! irrelevant ones (no wellness programs).

use crate::analogy::AnalogyTerms;
use crate::pairs::TextPair;
use crate::relevance::Evidence;

/// Evidence passage as `(text, language, relevant)`.
pub type EvidenceRow = (&'static str, &'static str, bool);

pub const WELLNESS_QUERY: &str =
    "How comprehensive are the organization’s employee wellness programs?";

pub fn capital_analogy() -> AnalogyTerms {
    AnalogyTerms::new("Paris", "France", "England", "London")
}

/// Russian lines paired with a light rewording.
pub const RUSSIAN_PARAPHRASES: [(&str, &str); 4] = [
    ("В лесу родилась ёлочка", "В лесу выросла ёлочка"),
    ("В лесу она росла", "В лесу она подрастала"),
    ("Зимой и летом стройная", "Зимой и летом изящная"),
    ("Зеленая была", "Изумрудная была"),
];

/// Russian lines paired with their French translation.
pub const RUSSIAN_FRENCH_TRANSLATIONS: [(&str, &str); 4] = [
    ("В лесу родилась ёлочка", "Un sapin est né dans la forêt"),
    ("В лесу она росла", "Dans la forêt, il a grandi"),
    ("Зимой и летом стройная", "En hiver et en été, élancé"),
    ("Зеленая была", "Il était vert"),
];

pub const ENGLISH_EVIDENCE: [EvidenceRow; 5] = [
    (
        "At Horizon Inc., we prioritize employee well-being with a holistic wellness program. This includes gym memberships, mental health counseling through an on-site therapist, and financial planning workshops held quarterly. Last year, we expanded with mindfulness sessions and a subsidized healthy meal plan, ensuring staff thrive in all aspects of life.",
        "English",
        true,
    ),
    (
        "Our company values health and provides a fitness center at headquarters with an annual health fair. Employees enjoy discounted gym rates and a spring step challenge. While we focus on physical fitness, we’re exploring more offerings based on feedback from our yearly employee survey.",
        "English",
        true,
    ),
    (
        "Horizon Inc. delivers top-quality products, with teams working diligently to meet deadlines. We recently upgraded our office with ergonomic furniture and a modern break room to enhance comfort during long hours, reflecting our commitment to a productive environment.",
        "English",
        false,
    ),
    (
        "Our company focuses on innovation and productivity. We introduced a new project management tool to streamline workflows and ensure timely delivery of client projects. Team meetings are held weekly to align on goals and address challenges, fostering a collaborative environment.",
        "English",
        false,
    ),
    (
        "At Horizon Inc., our engineering team works on cutting-edge projects. We’ve invested in state-of-the-art workstations and offer continuous training to keep technical skills up to date. The company cafeteria was renovated to include fast-food options.",
        "English",
        false,
    ),
];

pub const FRENCH_EVIDENCE: [EvidenceRow; 5] = [
    (
        "Chez Horizon Inc., nous priorisons le bien-être des employés avec un programme complet comprenant des abonnements à des salles de sport, des services de conseil en santé mentale par un thérapeute sur place et des ateliers de planification financière trimestriels. L’an dernier, nous avons ajouté des sessions de pleine conscience et un plan de repas sains subventionné.",
        "French",
        true,
    ),
    (
        "Notre entreprise valorise la santé et offre un centre de fitness au siège avec une foire annuelle de la santé. Les employés bénéficient de tarifs réduits pour les salles de sport et participent à un défi de pas au printemps. Nous nous concentrons sur la forme physique, mais explorons d’autres options basées sur les retours de notre enquête annuelle.",
        "French",
        true,
    ),
    (
        "Horizon Inc. s’engage à fournir des produits de haute qualité, avec des équipes travaillant dur pour respecter les délais. Nous avons récemment modernisé nos bureaux avec des meubles ergonomiques et une salle de pause contemporaine pour améliorer le confort pendant les longues heures de travail.",
        "French",
        false,
    ),
    (
        "Notre entreprise se concentre sur l’innovation et la productivité. Nous avons introduit un nouvel outil de gestion de projet pour rationaliser les flux de travail et assurer une livraison ponctuelle des projets clients. Des réunions d’équipe hebdomadaires alignent les objectifs et résolvent les défis.",
        "French",
        false,
    ),
    (
        "Chez Horizon Inc., notre équipe d’ingénieurs travaille sur des projets de pointe. Nous avons investi dans des stations de travail de dernière génération et offrons une formation continue pour maintenir les compétences techniques à jour. La cafétéria a été rénovée pour inclure des options de restauration rapide.",
        "French",
        false,
    ),
];

pub const MANDARIN_EVIDENCE: [EvidenceRow; 5] = [
    (
        "在Horizon公司，我们优先考虑员工的福祉，提供全面的健康计划，包括健身房会员、现场心理健康咨询和每季度的财务规划研讨会。去年，我们增加了正念课程和补贴健康饮食计划，以支持员工的全面健康。",
        "Mandarin",
        true,
    ),
    (
        "我们公司重视健康，在总部设有健身中心并举办年度健康博览会。员工可享受健身房折扣价并参加春季步数挑战赛。我们专注于身体健康，但根据年度员工调查的反馈正在探索更多选择。",
        "Mandarin",
        true,
    ),
    (
        "Horizon公司致力于交付高质量产品，团队努力工作以按时完成任务。我们最近升级了办公室，配备人体工学家具和现代休息室，以提高长时间工作的舒适度。",
        "Mandarin",
        false,
    ),
    (
        "我们公司专注于创新和生产力。我们引入了新的项目管理工具，以优化工作流程并确保客户项目按时交付。每周团队会议帮助统一目标并解决问题。",
        "Mandarin",
        false,
    ),
    (
        "在Horizon公司，我们的工程师团队致力于尖端项目。我们投资了最先进的工作站并提供持续培训以保持技术技能的更新。公司食堂已翻新，增加了快餐选择。",
        "Mandarin",
        false,
    ),
];

pub const RUSSIAN_EVIDENCE: [EvidenceRow; 5] = [
    (
        "В Horizon Inc. мы уделяем приоритетное внимание благополучию сотрудников с помощью комплексной программы, включающей абонементы в спортзал, консультации по психическому здоровью с терапевтом на месте и ежеквартальные семинары по финансовому планированию. В прошлом году мы добавили занятия по осознанности и субсидируемый план здорового питания.",
        "Russian",
        true,
    ),
    (
        "Наша компания ценит здоровье и предоставляет фитнес-центр в штаб-квартире с ежегодной ярмаркой здоровья. Сотрудники получают скидки на абонементы в спортзал и участвуют в весеннем шаговом марафоне. Мы сосредоточены на физической форме, но изучаем дополнительные возможности на основе отзывов из ежегодного опроса.",
        "Russian",
        true,
    ),
    (
        "Horizon Inc. стремится поставлять продукцию высокого качества, а команды усердно работают, чтобы соблюдать сроки. Недавно мы обновили офис эргономичной мебелью и современной комнатой отдыха, чтобы повысить комфорт во время долгих рабочих часов.",
        "Russian",
        false,
    ),
    (
        "Наша компания сосредоточена на инновациях и производительности. Мы внедрили новый инструмент управления проектами для оптимизации рабочих процессов и своевременной доставки проектов клиентам. Еженедельные встречи команды помогают согласовывать цели и решать проблемы.",
        "Russian",
        false,
    ),
    (
        "В Horizon Inc. наша команда инженеров работает над передовыми проектами. Мы инвестировали в современные рабочие станции и предлагаем непрерывное обучение для поддержания технических навыков. Столовая компании была обновлена, чтобы включить варианты быстрого питания.",
        "Russian",
        false,
    ),
];

/// Spanish passages with two English ones mixed in.
pub const MIXED_SPANISH_EVIDENCE: [EvidenceRow; 5] = [
    (
        "At Horizon Inc., we prioritize employee well-being with a comprehensive program including gym memberships, mental health counseling, and financial planning workshops. We offer mindfulness sessions and a subsidized healthy meal plan to support all aspects of employee health.",
        "English",
        true,
    ),
    (
        "Nuestra empresa valora la salud de los empleados y ofrece un centro de fitness en la sede con una feria de salud anual. Los empleados disfrutan de tarifas de gimnasio con descuento y un desafío de pasos en primavera. Nos enfocamos en la aptitud física, pero estamos explorando más opciones según los comentarios de la encuesta anual.",
        "Spanish",
        true,
    ),
    (
        "Horizon Inc. se dedica a entregar productos de alta calidad, con equipos que trabajan arduamente para cumplir plazos. Recientemente actualizamos nuestra oficina con muebles ergonómicos y una sala de descanso moderna para mejorar la comodidad durante largas horas de trabajo.",
        "Spanish",
        false,
    ),
    (
        "Our company focuses on innovation and productivity. We recently introduced a new project management tool to streamline workflows and ensure timely delivery of client projects. Team meetings are held weekly to align on goals and address challenges, fostering a collaborative environment.",
        "English",
        false,
    ),
    (
        "En Horizon Inc., nuestro equipo de ingenieros trabaja en proyectos de vanguardia. Hemos invertido en estaciones de trabajo de última generación y ofrecemos formación continua para mantener las habilidades técnicas al día. La cafetería de la empresa se renovó para incluir opciones de comida rápida.",
        "Spanish",
        false,
    ),
];

pub fn text_pairs(rows: &[(&str, &str)]) -> Vec<TextPair> {
    rows.iter()
        .map(|(left, right)| TextPair::new(*left, *right))
        .collect()
}

pub fn evidence_set(rows: &[EvidenceRow]) -> Vec<Evidence> {
    rows.iter()
        .map(|(text, language, relevant)| Evidence::new(*text, *language, *relevant))
        .collect()
}
