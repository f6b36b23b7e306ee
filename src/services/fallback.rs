use once_cell::sync::Lazy;
use regex::Regex;

use crate::i18n::Locale;
use crate::models::{ChatTurn, Role};

/// A canned reply. Name-recall entries are templated with the name recovered
/// from the conversation history, or use the `unknown` text when none was.
#[derive(Clone, Copy)]
enum Reply {
    Text(&'static str),
    NameRecall {
        known: &'static str,
        unknown: &'static str,
    },
}

impl Reply {
    fn render(&self, name: Option<&str>) -> String {
        match self {
            Reply::Text(text) => (*text).to_string(),
            Reply::NameRecall { known, unknown } => match name {
                Some(n) => known.replace("{name}", n),
                None => (*unknown).to_string(),
            },
        }
    }
}

/// Name-introduction patterns, applied in order to each user turn. One list
/// covers both languages so a name introduced in either language is found
/// regardless of the request's language.
static NAME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(
            r"(?i)(?:my name is|i'm|i am|call me|اسمي|أنا|اسمي هو)\s+([A-Za-z\x{0600}-\x{06FF}\s]+?)(?:[!.,?]|$)",
        )
        .expect("name pattern"),
        // Bare capitalized word, e.g. a one-word reply to "what's your name?"
        Regex::new(r"(?:^|\s)([A-Z][a-z]+)(?:\s+said|$)").expect("name pattern"),
    ]
});

const NAME_STOPWORDS: &[&str] = &[
    "the", "a", "an", "is", "are", "was", "were", "this", "that", "what", "how", "when", "where",
    "why",
];

fn is_stopword(candidate: &str) -> bool {
    NAME_STOPWORDS
        .iter()
        .any(|w| candidate.eq_ignore_ascii_case(w))
}

/// Scans the history most-recent-first, user turns only, and returns the
/// first plausible name: 2-29 characters and not a stopword. The heuristic
/// is deliberately simple and misfires on names that are also common words
/// or on punctuated multi-word names.
pub fn extract_name(history: &[ChatTurn]) -> Option<String> {
    for turn in history.iter().rev() {
        if turn.role != Role::User {
            continue;
        }
        for pattern in NAME_PATTERNS.iter() {
            let Some(m) = pattern.captures(&turn.content).and_then(|c| c.get(1)) else {
                continue;
            };
            let candidate = m.as_str().trim();
            let len = candidate.chars().count();
            if (2..=29).contains(&len) && !is_stopword(candidate) {
                return Some(candidate.to_string());
            }
        }
    }
    None
}

/// Deterministic reply for when the completion API is unavailable. Total: it
/// always returns a non-empty string in the requested language.
pub fn fallback_response(message: &str, locale: Locale, history: &[ChatTurn]) -> String {
    let lower = message.trim().to_lowercase();
    let name = extract_name(history);

    let (table, default) = match locale {
        Locale::En => (&*EN_REPLIES, EN_DEFAULT),
        Locale::Ar => (&*AR_REPLIES, AR_DEFAULT),
    };

    for (trigger, reply) in table.iter() {
        if lower.contains(*trigger) {
            return reply.render(name.as_deref());
        }
    }

    default.render(name.as_deref())
}

/// Longer triggers are checked first so "what was my name" wins over "name".
/// Stable sort keeps the declaration order among equal-length triggers.
fn sorted_by_specificity(raw: &[(&'static str, Reply)]) -> Vec<(&'static str, Reply)> {
    let mut table = raw.to_vec();
    table.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));
    table
}

static EN_REPLIES: Lazy<Vec<(&'static str, Reply)>> = Lazy::new(|| sorted_by_specificity(EN_RAW));
static AR_REPLIES: Lazy<Vec<(&'static str, Reply)>> = Lazy::new(|| sorted_by_specificity(AR_RAW));

const EN_DEFAULT: Reply = Reply::Text(
    "I'm here to help! I can answer questions about:\n\n**Services:**\n• Software Engineering (ERP, HRMS, Payment Systems, E-Commerce)\n• AI & Technologies (Machine Learning, IoT, Smart Systems)\n• Creative Studio (Photography, Video, 3D Animation)\n\n**Company Info:**\n• About Heditra\n• Portfolio & Projects\n• Contact Information\n• Pricing\n\nWhat would you like to know?",
);

const EN_RAW: &[(&str, Reply)] = &[
    ("hello", Reply::Text("Hello! 👋 Welcome to Heditra. I'm here to help you learn about our technology and creative solutions. How can I assist you today?")),
    ("hi", Reply::Text("Hi there! 👋 Welcome to Heditra. We're a leading technology and creative solutions provider based in Dubai, UAE. What would you like to know?")),
    ("hey", Reply::Text("Hey! 👋 Thanks for reaching out to Heditra. I'm here to answer your questions about our services, portfolio, or company. What can I help with?")),
    ("how are you", Reply::Text("I'm doing great, thank you for asking! 😊 I'm here and ready to help you learn about Heditra's services and solutions. How can I assist you today?")),
    ("what is your name", Reply::Text("I'm the Heditra AI assistant! I'm here to help you learn about our technology and creative solutions. What would you like to know?")),
    ("what's your name", Reply::Text("I'm the Heditra AI assistant! I'm here to help you learn about our technology and creative solutions. What would you like to know?")),
    ("who are you", Reply::Text("I'm the Heditra AI assistant! I help visitors learn about Heditra's services, portfolio, and company information. How can I help you today?")),
    ("what was my name", Reply::NameRecall {
        known: "Your name is {name}! Nice to meet you, {name}. How can I help you today?",
        unknown: "I don't recall you telling me your name yet. What's your name?",
    }),
    ("what is my name", Reply::NameRecall {
        known: "Your name is {name}! How can I assist you today, {name}?",
        unknown: "I don't think you've told me your name yet. What should I call you?",
    }),
    ("do you remember my name", Reply::NameRecall {
        known: "Yes, of course! Your name is {name}. How can I help you today, {name}?",
        unknown: "I'm sorry, I don't think you've told me your name yet. What's your name?",
    }),
    ("what do you have", Reply::Text("Heditra offers three main service areas: Software Engineering (ERP, HRMS, Payment Systems, E-Commerce), AI & Technologies (Machine Learning, IoT, Smart Systems), and Creative Studio (Photography, Video Production, 3D Animation). Which one interests you?")),
    ("what do you offer", Reply::Text("We offer Software Engineering solutions like ERP and HRMS systems, AI & Technologies including Machine Learning and IoT, plus Creative Studio services for photography, video production, and 3D animation. What are you looking for?")),
    ("what can you do", Reply::Text("I can help you learn about Heditra's services, portfolio projects, company information, pricing, and contact details. I'm here to answer any questions you have about our technology and creative solutions!")),
    ("what services", Reply::Text("Heditra provides three main services: Software Engineering (ERP, HRMS, Payment Systems, E-Commerce), AI & Technologies (Machine Learning, IoT, Smart Systems), and Creative Studio (Photography, Video, 3D Animation). Which area interests you?")),
    ("service", Reply::Text("Heditra offers three main service categories:\n\n**1. Software Engineering**\n• ERP Systems\n• HRMS Solutions\n• Payment Systems & Gateways\n• E-Commerce Platforms\n\n**2. AI & Technologies**\n• Machine Learning Solutions\n• IoT Integration\n• Smart Systems\n• Predictive Analytics\n\n**3. Creative Studio**\n• Professional Photography\n• Video Production\n• 3D Animation\n• AR/VR Content\n\nWhich service interests you most?")),
    ("services", Reply::Text("Heditra offers three main service categories:\n\n**1. Software Engineering**\n• ERP Systems\n• HRMS Solutions\n• Payment Systems & Gateways\n• E-Commerce Platforms\n\n**2. AI & Technologies**\n• Machine Learning Solutions\n• IoT Integration\n• Smart Systems\n• Predictive Analytics\n\n**3. Creative Studio**\n• Professional Photography\n• Video Production\n• 3D Animation\n• AR/VR Content\n\nWhich service interests you most?")),
    ("software", Reply::Text("Our **Software Engineering** services include:\n\n• Enterprise Resource Planning (ERP) Systems\n• Human Resource Management Systems (HRMS)\n• Payment Systems & Payment Gateways\n• E-Commerce Platforms & Multi-vendor Marketplaces\n\nWe've delivered 500+ projects with 98% client satisfaction. Would you like to know more about a specific service?")),
    ("ai", Reply::Text("Our **AI & Technologies** solutions include:\n\n• Machine Learning & Predictive Analytics\n• IoT Integration & Smart Systems\n• Computer Vision & AI-Powered Analytics\n• Custom AI Solutions\n\nWe've worked on projects like AI-powered CCTV analytics and predictive maintenance systems. Interested in learning more?")),
    ("creative", Reply::Text("Our **Creative Studio** offers:\n\n• Professional Photography Services\n• Corporate & Brand Video Production (4K)\n• 3D Animation & Visualization\n• AR/VR Content Creation\n\nWe create high-quality visual content for brands and businesses. What type of creative project are you considering?")),
    ("price", Reply::Text("For pricing information, please contact us directly. We provide customized quotes based on your specific project requirements and needs.\n\n📧 Email: info@Heditra.com\n📞 Phone: +971 XX XXX XXXX\n\nYou can also fill out our contact form on the website for a faster response!")),
    ("pricing", Reply::Text("Pricing varies based on project scope and requirements. We offer customized solutions tailored to each client's needs.\n\nFor a detailed quote, please contact us:\n📧 info@Heditra.com\n📞 +971 XX XXX XXXX\n\nWe'd be happy to discuss your project and provide a personalized estimate.")),
    ("cost", Reply::Text("Our pricing is customized for each project. To get an accurate quote, please share your project details with us.\n\nContact us at:\n📧 info@Heditra.com\n📞 +971 XX XXX XXXX\n\nWe'll provide a detailed estimate based on your specific requirements.")),
    ("contact", Reply::Text("You can reach Heditra through:\n\n📧 **Email:** info@Heditra.com\n📞 **Phone:** +971 XX XXX XXXX\n📍 **Location:** Dubai, United Arab Emirates\n\nYou can also fill out our contact form on the website for inquiries about services, pricing, or project discussions.")),
    ("email", Reply::Text("Our email address is **info@Heditra.com**\n\nFeel free to reach out for:\n• Service inquiries\n• Project discussions\n• Pricing information\n• General questions\n\nWe typically respond within 24 hours.")),
    ("phone", Reply::Text("You can reach us by phone at **+971 XX XXX XXXX**\n\nOur team is available to discuss:\n• Your project requirements\n• Service details\n• Consultation appointments\n• Any questions you may have")),
    ("location", Reply::Text("Heditra is located in **Dubai, United Arab Emirates**.\n\n📍 Dubai, UAE\n\nWe serve clients across the UAE and internationally. For specific address details or to schedule a visit, please contact us at info@Heditra.com.")),
    ("portfolio", Reply::Text("Our portfolio showcases 500+ successful projects across Software, AI, and Creative categories.\n\n**Featured Projects:**\n• Enterprise ERP Systems\n• AI-Powered CCTV Analytics\n• Corporate Brand Videos\n• E-Commerce Platforms\n• Predictive Maintenance AI\n• 3D Product Visualization\n\nYou can view detailed case studies in the Portfolio section on our homepage. Which type of project interests you?")),
    ("projects", Reply::Text("We've delivered **500+ projects** with a **98% client satisfaction rate**.\n\nOur portfolio includes:\n• Enterprise software solutions\n• AI and machine learning systems\n• Creative production work\n\nBrowse our Portfolio section on the website to see detailed case studies. What type of project are you interested in?")),
    ("about", Reply::Text("**Heditra** is a leading technology and creative solutions provider founded in 2020, based in Dubai, UAE.\n\n**Our Mission:** Empower businesses with cutting-edge technology and creative solutions that drive growth, efficiency, and innovation.\n\n**Our Impact:**\n• 500+ Projects Delivered\n• 200+ Happy Clients\n• 50+ Team Members\n• 98% Client Satisfaction\n\n**Our Values:** Innovation First, Client-Centric, Quality Excellence, Agile Delivery")),
    ("company", Reply::Text("**Heditra** (Technologies & Creative Design) is a technology and creative solutions provider based in Dubai, UAE, founded in 2020.\n\nWe specialize in:\n• Software Engineering (ERP, HRMS, Payment Systems, E-Commerce)\n• AI & Technologies (Machine Learning, IoT, Smart Systems)\n• Creative Studio (Photography, Video, 3D Animation)\n\nWith 500+ projects delivered and 98% client satisfaction, we're committed to delivering excellence.")),
    ("team", Reply::Text("Heditra has a team of **50+ professionals** including:\n\n• Software Engineers\n• AI Specialists\n• Creative Directors\n• Project Managers\n\nOur diverse team brings together technical excellence and creative innovation to deliver exceptional results for our clients.")),
    ("experience", Reply::Text("Heditra has extensive experience:\n\n• **500+ Projects Delivered**\n• **200+ Happy Clients**\n• **98% Client Satisfaction Rate**\n• **50+ Team Members**\n\nFounded in 2020, we've grown into a leading provider of technology and creative solutions in the UAE and beyond.")),
    ("stats", Reply::Text("**Heditra by the Numbers:**\n\n📊 500+ Projects Delivered\n👥 200+ Happy Clients\n🤝 50+ Team Members\n⭐ 98% Client Satisfaction Rate\n\nThese numbers reflect our commitment to excellence and client success.")),
];

const AR_DEFAULT: Reply = Reply::Text(
    "أنا هنا للمساعدة! يمكنني الإجابة على الأسئلة حول:\n\n**الخدمات:**\n• هندسة البرمجيات (تخطيط الموارد، الموارد البشرية، أنظمة الدفع، التجارة الإلكترونية)\n• الذكاء الاصطناعي والتقنيات (التعلم الآلي، إنترنت الأشياء، الأنظمة الذكية)\n• الاستوديو الإبداعي (التصوير، الفيديو، الرسوم المتحركة ثلاثية الأبعاد)\n\n**معلومات الشركة:**\n• حول هادترا\n• المحفظة والمشاريع\n• معلومات الاتصال\n• الأسعار\n\nماذا تريد أن تعرف؟",
);

const AR_RAW: &[(&str, Reply)] = &[
    ("مرحبا", Reply::Text("مرحباً! 👋 أهلاً بك في هادترا. أنا هنا لمساعدتك في التعرف على حلولنا التقنية والإبداعية. كيف يمكنني مساعدتك اليوم؟")),
    ("السلام", Reply::Text("السلام عليكم! 👋 أهلاً بك في هادترا. نحن مزود رائد للحلول التقنية والإبداعية مقرنا في دبي، الإمارات العربية المتحدة. ماذا تريد أن تعرف؟")),
    ("أهلا", Reply::Text("أهلاً وسهلاً! 👋 شكراً لتواصلك مع هادترا. أنا هنا للإجابة على أسئلتك حول خدماتنا أو محفظتنا أو الشركة. كيف يمكنني المساعدة؟")),
    ("كيف حالك", Reply::Text("أنا بخير، شكراً لسؤالك! 😊 أنا هنا ومستعد لمساعدتك في التعرف على خدمات وحلول هادترا. كيف يمكنني مساعدتك اليوم؟")),
    ("ما اسمك", Reply::Text("أنا مساعد هادترا الذكي! أنا هنا لمساعدتك في التعرف على حلولنا التقنية والإبداعية. ماذا تريد أن تعرف؟")),
    ("من أنت", Reply::Text("أنا مساعد هادترا الذكي! أساعد الزوار في التعرف على خدمات هادترا ومحفظتها ومعلومات الشركة. كيف يمكنني مساعدتك اليوم؟")),
    ("ما كان اسمي", Reply::NameRecall {
        known: "اسمك {name}! سعيد بلقائك، {name}. كيف يمكنني مساعدتك اليوم؟",
        unknown: "لا أتذكر أنك أخبرتني باسمك بعد. ما اسمك؟",
    }),
    ("ما اسمي", Reply::NameRecall {
        known: "اسمك {name}! كيف يمكنني مساعدتك اليوم، {name}؟",
        unknown: "لا أعتقد أنك أخبرتني باسمك بعد. ماذا يجب أن أناديك؟",
    }),
    ("هل تتذكر اسمي", Reply::NameRecall {
        known: "نعم، بالطبع! اسمك {name}. كيف يمكنني مساعدتك اليوم، {name}؟",
        unknown: "أعتذر، لا أعتقد أنك أخبرتني باسمك بعد. ما اسمك؟",
    }),
    ("ماذا لديك", Reply::Text("تقدم هادترا ثلاث مجالات خدمات رئيسية: هندسة البرمجيات (تخطيط الموارد، الموارد البشرية، أنظمة الدفع، التجارة الإلكترونية)، الذكاء الاصطناعي والتقنيات (التعلم الآلي، إنترنت الأشياء، الأنظمة الذكية)، والاستوديو الإبداعي (التصوير، إنتاج الفيديو، الرسوم المتحركة ثلاثية الأبعاد). أي منها يهمك؟")),
    ("ماذا تقدم", Reply::Text("نقدم حلول هندسة البرمجيات مثل أنظمة تخطيط الموارد والموارد البشرية، الذكاء الاصطناعي والتقنيات بما في ذلك التعلم الآلي وإنترنت الأشياء، بالإضافة إلى خدمات الاستوديو الإبداعي للتصوير وإنتاج الفيديو والرسوم المتحركة ثلاثية الأبعاد. ماذا تبحث عنه؟")),
    ("ماذا يمكنك أن تفعل", Reply::Text("يمكنني مساعدتك في التعرف على خدمات هادترا ومشاريع المحفظة ومعلومات الشركة والأسعار وتفاصيل الاتصال. أنا هنا للإجابة على أي أسئلة لديك حول حلولنا التقنية والإبداعية!")),
    ("ما الخدمات", Reply::Text("تقدم هادترا ثلاث خدمات رئيسية: هندسة البرمجيات (تخطيط الموارد، الموارد البشرية، أنظمة الدفع، التجارة الإلكترونية)، الذكاء الاصطناعي والتقنيات (التعلم الآلي، إنترنت الأشياء، الأنظمة الذكية)، والاستوديو الإبداعي (التصوير، الفيديو، الرسوم المتحركة ثلاثية الأبعاد). أي مجال يهمك؟")),
    ("خدمة", Reply::Text("تقدم هادترا ثلاث فئات خدمات رئيسية:\n\n**1. هندسة البرمجيات**\n• أنظمة تخطيط موارد المؤسسات\n• حلول إدارة الموارد البشرية\n• أنظمة الدفع والبوابات\n• منصات التجارة الإلكترونية\n\n**2. الذكاء الاصطناعي والتقنيات**\n• حلول التعلم الآلي\n• تكامل إنترنت الأشياء\n• الأنظمة الذكية\n• التحليلات التنبؤية\n\n**3. الاستوديو الإبداعي**\n• التصوير الفوتوغرافي الاحترافي\n• إنتاج الفيديو\n• الرسوم المتحركة ثلاثية الأبعاد\n• محتوى الواقع المعزز والافتراضي\n\nأي خدمة تهمك أكثر؟")),
    ("خدمات", Reply::Text("تقدم هادترا ثلاث فئات خدمات رئيسية:\n\n**1. هندسة البرمجيات**\n• أنظمة تخطيط موارد المؤسسات\n• حلول إدارة الموارد البشرية\n• أنظمة الدفع والبوابات\n• منصات التجارة الإلكترونية\n\n**2. الذكاء الاصطناعي والتقنيات**\n• حلول التعلم الآلي\n• تكامل إنترنت الأشياء\n• الأنظمة الذكية\n• التحليلات التنبؤية\n\n**3. الاستوديو الإبداعي**\n• التصوير الفوتوغرافي الاحترافي\n• إنتاج الفيديو\n• الرسوم المتحركة ثلاثية الأبعاد\n• محتوى الواقع المعزز والافتراضي\n\nأي خدمة تهمك أكثر؟")),
    ("برمجيات", Reply::Text("خدمات **هندسة البرمجيات** لدينا تشمل:\n\n• أنظمة تخطيط موارد المؤسسات (ERP)\n• أنظمة إدارة الموارد البشرية (HRMS)\n• أنظمة الدفع وبوابات الدفع\n• منصات التجارة الإلكترونية والأسواق متعددة البائعين\n\nلقد أنجزنا أكثر من 500 مشروع مع معدل رضا عملاء 98%. هل تريد معرفة المزيد عن خدمة محددة؟")),
    ("ذكاء", Reply::Text("حلول **الذكاء الاصطناعي والتقنيات** لدينا تشمل:\n\n• التعلم الآلي والتحليلات التنبؤية\n• تكامل إنترنت الأشياء والأنظمة الذكية\n• الرؤية الحاسوبية والتحليلات المدعومة بالذكاء الاصطناعي\n• حلول ذكاء اصطناعي مخصصة\n\nلقد عملنا على مشاريع مثل تحليلات كاميرات المراقبة المدعومة بالذكاء الاصطناعي وأنظمة الصيانة التنبؤية. هل أنت مهتم بمعرفة المزيد؟")),
    ("إبداعي", Reply::Text("**الاستوديو الإبداعي** لدينا يقدم:\n\n• خدمات التصوير الفوتوغرافي الاحترافية\n• إنتاج فيديو الشركات والعلامات التجارية (4K)\n• الرسوم المتحركة ثلاثية الأبعاد والتصور\n• إنشاء محتوى الواقع المعزز والافتراضي\n\nننشئ محتوى بصري عالي الجودة للعلامات التجارية والشركات. ما نوع المشروع الإبداعي الذي تفكر فيه؟")),
    ("سعر", Reply::Text("للحصول على معلومات الأسعار، يرجى التواصل معنا مباشرة. نقدم عروض أسعار مخصصة بناءً على متطلبات واحتياجات مشروعك المحددة.\n\n📧 البريد الإلكتروني: info@Heditra.com\n📞 الهاتف: +971 XX XXX XXXX\n\nيمكنك أيضاً ملء نموذج الاتصال على موقعنا للحصول على رد أسرع!")),
    ("أسعار", Reply::Text("تختلف الأسعار حسب نطاق المشروع والمتطلبات. نقدم حلولاً مخصصة مصممة حسب احتياجات كل عميل.\n\nللحصول على عرض أسعار مفصل، يرجى التواصل معنا:\n📧 info@Heditra.com\n📞 +971 XX XXX XXXX\n\nسنكون سعداء لمناقشة مشروعك وتقديم تقدير مخصص.")),
    ("تكلفة", Reply::Text("أسعارنا مخصصة لكل مشروع. للحصول على عرض أسعار دقيق، يرجى مشاركة تفاصيل مشروعك معنا.\n\nتواصل معنا على:\n📧 info@Heditra.com\n📞 +971 XX XXX XXXX\n\nسنقدم تقديراً مفصلاً بناءً على متطلباتك المحددة.")),
    ("اتصال", Reply::Text("يمكنك التواصل مع هادترا من خلال:\n\n📧 **البريد الإلكتروني:** info@Heditra.com\n📞 **الهاتف:** +971 XX XXX XXXX\n📍 **الموقع:** دبي، الإمارات العربية المتحدة\n\nيمكنك أيضاً ملء نموذج الاتصال على موقعنا للاستفسارات حول الخدمات أو الأسعار أو مناقشة المشاريع.")),
    ("بريد", Reply::Text("عنوان بريدنا الإلكتروني هو **info@Heditra.com**\n\nلا تتردد في التواصل من أجل:\n• استفسارات الخدمات\n• مناقشة المشاريع\n• معلومات الأسعار\n• أسئلة عامة\n\nنرد عادة خلال 24 ساعة.")),
    ("هاتف", Reply::Text("يمكنك التواصل معنا عبر الهاتف على **+971 XX XXX XXXX**\n\nفريقنا متاح لمناقشة:\n• متطلبات مشروعك\n• تفاصيل الخدمات\n• مواعيد الاستشارات\n• أي أسئلة قد تكون لديك")),
    ("موقع", Reply::Text("هادترا موجودة في **دبي، الإمارات العربية المتحدة**.\n\n📍 دبي، الإمارات\n\nنخدم العملاء في جميع أنحاء الإمارات ودولياً. للحصول على تفاصيل العنوان المحدد أو لجدولة زيارة، يرجى التواصل معنا على info@Heditra.com.")),
    ("معرض", Reply::Text("تعرض محفظتنا أكثر من 500 مشروع ناجح عبر فئات البرمجيات والذكاء الاصطناعي والإبداعي.\n\n**مشاريع مميزة:**\n• أنظمة تخطيط موارد المؤسسات\n• تحليلات كاميرات المراقبة المدعومة بالذكاء الاصطناعي\n• فيديوهات العلامات التجارية للشركات\n• منصات التجارة الإلكترونية\n• الذكاء الاصطناعي للصيانة التنبؤية\n• تصور المنتجات ثلاثية الأبعاد\n\nيمكنك عرض دراسات الحالة التفصيلية في قسم المحفظة على الصفحة الرئيسية. ما نوع المشروع الذي يهمك؟")),
    ("مشاريع", Reply::Text("لقد أنجزنا **أكثر من 500 مشروع** مع **معدل رضا عملاء 98%**.\n\nمحفظتنا تشمل:\n• حلول برمجيات المؤسسات\n• أنظمة الذكاء الاصطناعي والتعلم الآلي\n• أعمال الإنتاج الإبداعي\n\nتصفح قسم المحفظة على الموقع لمشاهدة دراسات الحالة التفصيلية. ما نوع المشروع الذي يهمك؟")),
    ("من نحن", Reply::Text("**هادترا** هي مزود رائد للحلول التقنية والإبداعية تأسست في عام 2020، مقرها في دبي، الإمارات العربية المتحدة.\n\n**مهمتنا:** تمكين الشركات بالتكنولوجيا المتطورة والحلول الإبداعية التي تدفع النمو والكفاءة والابتكار.\n\n**تأثيرنا:**\n• أكثر من 500 مشروع منجز\n• أكثر من 200 عميل سعيد\n• أكثر من 50 عضو فريق\n• معدل رضا العملاء 98%\n\n**قيمنا:** الابتكار أولاً، التركيز على العميل، التميز في الجودة، التسليم السريع")),
    ("شركة", Reply::Text("**هادترا** (التقنيات والتصميم الإبداعي) هي مزود حلول تقنية وإبداعية مقرها في دبي، الإمارات العربية المتحدة، تأسست في عام 2020.\n\nنتخصص في:\n• هندسة البرمجيات (تخطيط الموارد، الموارد البشرية، أنظمة الدفع، التجارة الإلكترونية)\n• الذكاء الاصطناعي والتقنيات (التعلم الآلي، إنترنت الأشياء، الأنظمة الذكية)\n• الاستوديو الإبداعي (التصوير، الفيديو، الرسوم المتحركة ثلاثية الأبعاد)\n\nمع أكثر من 500 مشروع منجز و98% رضا العملاء، نحن ملتزمون بتقديم التميز.")),
    ("فريق", Reply::Text("هادترا لديها فريق من **أكثر من 50 محترفاً** بما في ذلك:\n\n• مهندسو برمجيات\n• أخصائيو ذكاء اصطناعي\n• مدراء إبداعيون\n• مدراء مشاريع\n\nفريقنا المتنوع يجمع بين التميز التقني والابتكار الإبداعي لتقديم نتائج استثنائية لعملائنا.")),
    ("خبرة", Reply::Text("هادترا لديها خبرة واسعة:\n\n• **أكثر من 500 مشروع منجز**\n• **أكثر من 200 عميل سعيد**\n• **معدل رضا العملاء 98%**\n• **أكثر من 50 عضو فريق**\n\nتأسست في عام 2020، نمت لتصبح مزوداً رائداً للحلول التقنية والإبداعية في الإمارات وخارجها.")),
    ("إحصائيات", Reply::Text("**هادترا بالأرقام:**\n\n📊 أكثر من 500 مشروع منجز\n👥 أكثر من 200 عميل سعيد\n🤝 أكثر من 50 عضو فريق\n⭐ معدل رضا العملاء 98%\n\nهذه الأرقام تعكس التزامنا بالتميز ونجاح العملاء.")),
];
