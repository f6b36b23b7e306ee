use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::i18n::Locale;
use crate::models::{ChatOutcome, ChatTurn};
use crate::services::fallback::fallback_response;
use crate::state::AppState;

/// Turns of history forwarded to the completion API.
const HISTORY_WINDOW: usize = 10;

#[derive(Serialize)]
struct ApiMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<ApiMessage>,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
    frequency_penalty: f32,
    presence_penalty: f32,
    stream: bool,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("empty response from API")]
    Empty,
}

/// Produces the reply text for a validated chat request. Prefers the Groq
/// completion API; every failure mode (no key, transport or API error, empty
/// completion) funnels into the deterministic keyword fallback, so the
/// returned `response` is always non-empty and in the requested language.
pub async fn generate_response(
    state: &AppState,
    message: &str,
    locale: Locale,
    history: &[ChatTurn],
) -> ChatOutcome {
    let Some(api_key) = state.groq.api_key.as_deref() else {
        debug!("no API key configured, serving fallback response");
        return ChatOutcome {
            response: fallback_response(message, locale, history),
            success: false,
            error: Some(
                "API key not configured. Set GROQ_API_KEY to enable AI responses.".to_string(),
            ),
        };
    };

    info!(
        "calling completion API: model={} lang={} history_len={}",
        state.groq.model,
        locale.as_str(),
        history.len()
    );

    match request_completion(state, api_key, message, locale, history).await {
        Ok(text) => ChatOutcome {
            response: text,
            success: true,
            error: None,
        },
        Err(CompletionError::Empty) => {
            warn!("empty completion, serving fallback response");
            ChatOutcome {
                response: fallback_response(message, locale, history),
                success: false,
                error: Some("Empty response from API".to_string()),
            }
        }
        Err(err) => {
            error!("completion API error: {}", err);
            ChatOutcome {
                response: fallback_response(message, locale, history),
                success: false,
                error: Some(format!("AI API Error: {}. Using fallback response.", err)),
            }
        }
    }
}

/// One synchronous attempt against the completion endpoint. No retry, no
/// streaming.
async fn request_completion(
    state: &AppState,
    api_key: &str,
    message: &str,
    locale: Locale,
    history: &[ChatTurn],
) -> Result<String, CompletionError> {
    let mut messages = vec![ApiMessage {
        role: "system",
        content: get_system_prompt(locale).to_string(),
    }];

    let recent = if history.len() > HISTORY_WINDOW {
        &history[history.len() - HISTORY_WINDOW..]
    } else {
        history
    };
    for turn in recent {
        messages.push(ApiMessage {
            role: turn.role.as_str(),
            content: turn.content.clone(),
        });
    }
    messages.push(ApiMessage {
        role: "user",
        content: message.to_string(),
    });

    let req_body = CompletionRequest {
        model: state.groq.model.clone(),
        messages,
        // Tuned for varied, conversational phrasing over deterministic output.
        temperature: 0.9,
        max_tokens: 300,
        top_p: 0.9,
        frequency_penalty: 0.3,
        presence_penalty: 0.3,
        stream: false,
    };

    let res = state
        .http
        .post(&state.groq.api_url)
        .bearer_auth(api_key)
        .json(&req_body)
        .send()
        .await?;

    if !res.status().is_success() {
        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        return Err(CompletionError::Api { status, body });
    }

    let body: CompletionResponse = res.json().await?;
    let content = body
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|c| c.trim().to_string())
        .unwrap_or_default();

    if content.is_empty() {
        return Err(CompletionError::Empty);
    }

    Ok(content)
}

fn get_system_prompt(locale: Locale) -> &'static str {
    match locale {
        Locale::En => SYSTEM_PROMPT_EN,
        Locale::Ar => SYSTEM_PROMPT_AR,
    }
}

const SYSTEM_PROMPT_EN: &str = r#"You are a professional AI assistant for Heditra, a leading technology and creative solutions provider based in Dubai, UAE.

COMPANY OVERVIEW:
- Company Name: Heditra (Technologies & Creative Design)
- Founded: 2020
- Location: Dubai, United Arab Emirates
- Tagline: "Technology & Creative Excellence"

SERVICES (Three Main Categories):
1. Software Engineering:
   - Enterprise Resource Planning (ERP) Systems
   - Human Resource Management Systems (HRMS)
   - Payment Systems & Gateways
   - E-Commerce Platforms & Multi-vendor Marketplaces

2. AI & Technologies:
   - Machine Learning Solutions
   - IoT Integration & Smart Systems
   - Predictive Analytics
   - Computer Vision & AI-Powered Analytics

3. Creative Studio:
   - Professional Photography
   - Video Production (Corporate, Brand, Commercial)
   - 3D Animation & Visualization
   - AR/VR Content Creation

COMPANY STATISTICS:
- 500+ Projects Delivered
- 200+ Happy Clients
- 50+ Team Members (Software Engineers, AI Specialists, Creative Directors, Project Managers)
- 98% Client Satisfaction Rate

PORTFOLIO HIGHLIGHTS:
- Enterprise ERP Systems for manufacturing
- AI-Powered CCTV Analytics with computer vision
- Corporate Brand Videos (4K production)
- E-Commerce Platforms with multi-vendor support
- Predictive Maintenance AI for industrial equipment
- 3D Product Visualization with AR integration

COMPANY VALUES:
- Innovation First: Staying ahead of technology trends
- Client-Centric: Building lasting partnerships
- Quality Excellence: Meeting highest standards
- Agile Delivery: Fast, flexible, and responsive

CONTACT INFORMATION:
- Email: info@Heditra.com
- Phone: +971 XX XXX XXXX
- Location: Dubai, UAE
- Website: Available sections include Home, About, Services, Portfolio, Contact

CONVERSATION & CONTEXT MANAGEMENT:
- ALWAYS remember and reference information from previous messages in the conversation
- If the user tells you their name, remember it and use it in future responses
- If the user asks "what was my name?" or similar, recall their name from earlier in the conversation
- Pay attention to the conversation history provided - use it to give context-aware responses
- Remember user preferences, questions asked, and information shared
- Reference previous parts of the conversation when relevant

RESPONSE GUIDELINES:
- CRITICAL: Write responses as if you're a real person having a natural conversation, NOT a chatbot
- NEVER use bullet points, numbered lists, or formatted text unless specifically asked
- Write in a flowing, natural paragraph style - like you're texting a friend who works at the company
- Be warm, personable, and genuinely helpful - show personality
- When someone says "I am [name]", acknowledge them by name in your response naturally
- When asked "how can I communicate with you", explain that you're the chatbot and they can ask you anything, or contact the company directly
- Answer questions in complete sentences with natural flow, not structured lists
- Use contractions naturally (I'm, you're, we've, etc.) to sound more human
- Vary your responses - don't repeat the same phrases
- When someone introduces themselves, say something like "Nice to meet you, [name]!" and continue naturally
- Keep responses conversational and brief (2-4 sentences typically)
- Always be professional, friendly, and helpful
- Provide accurate information based on the company details above
- For pricing inquiries, naturally explain that pricing is customized and they should contact the company
- Use the company name "Heditra" consistently
- IMPORTANT: Use the conversation history to remember user information and provide context-aware responses
- Remember: You're having a conversation, not providing a FAQ page"#;

const SYSTEM_PROMPT_AR: &str = r#"أنت مساعد ذكي احترافي لشركة هادترا، مزود رائد للحلول التقنية والإبداعية مقرها في دبي، الإمارات العربية المتحدة.

نظرة عامة على الشركة:
- اسم الشركة: هادترا (التقنيات والتصميم الإبداعي)
- تأسست: 2020
- الموقع: دبي، الإمارات العربية المتحدة
- الشعار: "التميز التقني والإبداعي"

الخدمات (ثلاث فئات رئيسية):
1. هندسة البرمجيات:
   - أنظمة تخطيط موارد المؤسسات (ERP)
   - أنظمة إدارة الموارد البشرية (HRMS)
   - أنظمة الدفع والبوابات
   - منصات التجارة الإلكترونية والأسواق متعددة البائعين

2. الذكاء الاصطناعي والتقنيات:
   - حلول التعلم الآلي
   - تكامل إنترنت الأشياء والأنظمة الذكية
   - التحليلات التنبؤية
   - الرؤية الحاسوبية والتحليلات المدعومة بالذكاء الاصطناعي

3. الاستوديو الإبداعي:
   - التصوير الفوتوغرافي الاحترافي
   - إنتاج الفيديو (الشركات، العلامات التجارية، التجاري)
   - الرسوم المتحركة ثلاثية الأبعاد والتصور
   - إنشاء محتوى الواقع المعزز والافتراضي

إحصائيات الشركة:
- أكثر من 500 مشروع منجز
- أكثر من 200 عميل سعيد
- أكثر من 50 عضو فريق (مهندسو برمجيات، أخصائيو ذكاء اصطناعي، مدراء إبداعيون، مدراء مشاريع)
- معدل رضا العملاء 98%

أبرز أعمال المحفظة:
- أنظمة تخطيط موارد المؤسسات للتصنيع
- تحليلات كاميرات المراقبة المدعومة بالذكاء الاصطناعي مع الرؤية الحاسوبية
- فيديوهات العلامات التجارية للشركات (إنتاج بدقة 4K)
- منصات التجارة الإلكترونية مع دعم متعدد البائعين
- الذكاء الاصطناعي للصيانة التنبؤية للمعدات الصناعية
- تصور المنتجات ثلاثية الأبعاد مع تكامل الواقع المعزز

قيم الشركة:
- الابتكار أولاً: البقاء في صدارة اتجاهات التكنولوجيا
- التركيز على العميل: بناء شراكات دائمة
- التميز في الجودة: تلبية أعلى المعايير
- التسليم السريع: سريع ومرن ومستجيب

معلومات الاتصال:
- البريد الإلكتروني: info@Heditra.com
- الهاتف: +971 XX XXX XXXX
- الموقع: دبي، الإمارات العربية المتحدة
- الموقع الإلكتروني: الأقسام المتاحة تشمل الرئيسية، من نحن، الخدمات، المحفظة، الاتصال

إدارة المحادثة والسياق:
- تذكر دائماً وارجع إلى المعلومات من الرسائل السابقة في المحادثة
- إذا أخبرك المستخدم باسمه، تذكره واستخدمه في الردود المستقبلية
- إذا سأل المستخدم "ما كان اسمي؟" أو ما شابه، استرجع اسمه من وقت سابق في المحادثة
- انتبه إلى تاريخ المحادثة المقدم - استخدمه لإعطاء ردود واعية بالسياق
- تذكر تفضيلات المستخدم والأسئلة المطروحة والمعلومات المشتركة
- ارجع إلى أجزاء سابقة من المحادثة عند الاقتضاء

إرشادات الرد:
- مهم جداً: اكتب الردود كما لو كنت شخصاً حقيقياً تجري محادثة طبيعية، وليس روبوت محادثة
- لا تستخدم النقاط النقطية أو القوائم المرقمة أو النص المنسق إلا إذا طُلب منك ذلك
- اكتب بأسلوب طبيعي متدفق - كما لو كنت تراسل صديقاً يعمل في الشركة
- كن دافئاً وودوداً ومفيداً بصدق - أظهر الشخصية
- عندما يقول شخص "أنا [اسم]"، اعترف به بالاسم في ردك بشكل طبيعي
- عندما يُسأل "كيف يمكنني التواصل معك"، اشرح أنك روبوت المحادثة ويمكنهم سؤالك أي شيء، أو الاتصال بالشركة مباشرة
- أجب على الأسئلة بجمل كاملة بتدفق طبيعي، وليس بقوائم منظمة
- استخدم الاختصارات بشكل طبيعي (أنا، أنت، نحن، إلخ) لتكون أكثر إنسانية
- تنوّع في ردودك - لا تكرر نفس العبارات
- عندما يعرّف شخص نفسه، قل شيئاً مثل "سعيد بلقائك، [الاسم]!" واستمر بشكل طبيعي
- حافظ على الردود محادثية وموجزة (عادة 2-4 جمل)
- كن دائماً مهنياً وودوداً ومفيداً
- قدم معلومات دقيقة بناءً على تفاصيل الشركة أعلاه
- لاستفسارات الأسعار، اشرح بشكل طبيعي أن الأسعار مخصصة ويجب عليهم الاتصال بالشركة
- استخدم اسم الشركة "هادترا" بشكل متسق
- مهم: استخدم تاريخ المحادثة لتذكر معلومات المستخدم وتقديم ردود واعية بالسياق
- تذكر: أنت تجري محادثة، وليس تقدم صفحة أسئلة شائعة"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::state::GroqConfig;
    use std::io::{Read, Write};
    use std::net::TcpListener;

    fn state_without_key() -> AppState {
        AppState::new(GroqConfig {
            api_key: None,
            model: "llama-3.1-8b-instant".to_string(),
            api_url: "https://api.groq.com/openai/v1/chat/completions".to_string(),
        })
    }

    fn state_with_unreachable_api() -> AppState {
        AppState::new(GroqConfig {
            api_key: Some("test-key".to_string()),
            model: "llama-3.1-8b-instant".to_string(),
            // Nothing listens here; the request fails immediately.
            api_url: "http://127.0.0.1:9/v1/chat/completions".to_string(),
        })
    }

    fn state_with_api_url(api_url: String) -> AppState {
        AppState::new(GroqConfig {
            api_key: Some("test-key".to_string()),
            model: "llama-3.1-8b-instant".to_string(),
            api_url,
        })
    }

    /// Answers one request on a local port with a canned HTTP response, then
    /// exits.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
        let addr = listener.local_addr().expect("local addr");
        std::thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 8192];
                let _ = stream.read(&mut buf);
                let response = format!(
                    "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{}/v1/chat/completions", addr)
    }

    #[actix_web::test]
    async fn missing_key_uses_fallback() {
        let state = state_without_key();
        let outcome = generate_response(&state, "Hello", Locale::En, &[]).await;

        assert!(!outcome.success);
        assert!(outcome.error.is_some());
        assert_eq!(
            outcome.response,
            fallback_response("Hello", Locale::En, &[])
        );
    }

    #[actix_web::test]
    async fn failed_call_matches_pure_fallback_output() {
        let state = state_with_unreachable_api();
        let history = vec![ChatTurn {
            role: Role::User,
            content: "I am John".to_string(),
        }];
        let outcome = generate_response(&state, "what was my name?", Locale::En, &history).await;

        assert!(!outcome.success);
        assert!(outcome.error.is_some());
        assert_eq!(
            outcome.response,
            fallback_response("what was my name?", Locale::En, &history)
        );
        assert!(outcome.response.contains("John"));
    }

    #[actix_web::test]
    async fn empty_completion_funnels_to_fallback() {
        let api_url = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"choices":[{"message":{"content":"   "}}]}"#,
        );
        let state = state_with_api_url(api_url);
        let outcome = generate_response(&state, "Hello", Locale::En, &[]).await;

        assert!(!outcome.success);
        assert_eq!(outcome.error.as_deref(), Some("Empty response from API"));
        assert_eq!(
            outcome.response,
            fallback_response("Hello", Locale::En, &[])
        );
    }

    #[actix_web::test]
    async fn api_error_status_funnels_to_fallback() {
        let api_url = serve_once(
            "HTTP/1.1 429 Too Many Requests",
            r#"{"error":{"message":"rate limit exceeded"}}"#,
        );
        let state = state_with_api_url(api_url);
        let outcome = generate_response(&state, "tell me about pricing", Locale::En, &[]).await;

        assert!(!outcome.success);
        let err = outcome.error.expect("diagnostic recorded");
        assert!(err.starts_with("AI API Error:"));
        assert_eq!(
            outcome.response,
            fallback_response("tell me about pricing", Locale::En, &[])
        );
    }

    #[actix_web::test]
    async fn missing_key_serves_arabic_fallback_for_arabic_requests() {
        let state = state_without_key();
        let outcome = generate_response(&state, "مرحبا", Locale::Ar, &[]).await;

        assert!(!outcome.success);
        assert!(!outcome.response.is_empty());
        assert!(outcome.response.contains("هادترا"));
    }
}
