//! Per-language string tables

use super::table::{PricingLabels, Translations};

pub(super) static EN: Translations = Translations {
    search_placeholder: "Search AI tools...",
    categories: "Categories",
    all_tools: "All Tools",
    showing_results: "Showing {{count}} tools",
    no_tools_found: "No tools found",
    no_tools_desc: "Try adjusting your search or category filter.",
    back_to_directory: "Back to Directory",
    visit_website: "Visit Website",
    share: "Share",
    key_features: "Key Features",
    faq: "Frequently Asked Questions",
    is_free: "Is {{name}} free?",
    best_for: "What is {{name}} best for?",
    answer_free: "Yes, it is completely free.",
    answer_paid: "No, this is a paid tool, but they may offer a trial.",
    answer_freemium: "It offers a free tier with limited features, and paid plans for more power.",
    answer_best_for: "Based on its category ({{category}}), it is best suited for tasks related to {{topic}}.",
    tags: "Tags",
    alternatives: "Alternatives",
    pricing: PricingLabels {
        free: "Free",
        freemium: "Freemium",
        paid: "Paid",
        waitlist: "Waitlist",
        open_source: "Open Source",
    },
    cat: &[
        ("chatbot", "Chatbots"),
        ("writing", "Writing"),
        ("image", "Image Generation"),
        ("video", "Video"),
        ("audio", "Audio & Music"),
        ("coding", "Coding"),
        ("productivity", "Productivity"),
        ("research", "Research"),
    ],
};

pub(super) static VI: Translations = Translations {
    search_placeholder: "Tìm kiếm công cụ AI...",
    categories: "Danh mục",
    all_tools: "Tất cả công cụ",
    showing_results: "Hiển thị {{count}} công cụ",
    no_tools_found: "Không tìm thấy công cụ nào",
    no_tools_desc: "Hãy thử thay đổi từ khóa hoặc bộ lọc danh mục.",
    back_to_directory: "Quay lại danh bạ",
    visit_website: "Truy cập trang web",
    share: "Chia sẻ",
    key_features: "Tính năng chính",
    faq: "Câu hỏi thường gặp",
    is_free: "{{name}} có miễn phí không?",
    best_for: "{{name}} phù hợp nhất cho việc gì?",
    answer_free: "Có, công cụ này hoàn toàn miễn phí.",
    answer_paid: "Không, đây là công cụ trả phí, nhưng có thể có bản dùng thử.",
    answer_freemium: "Có gói miễn phí với tính năng giới hạn và các gói trả phí mạnh hơn.",
    answer_best_for: "Dựa trên danh mục ({{category}}), công cụ này phù hợp nhất cho các công việc liên quan đến {{topic}}.",
    tags: "Thẻ",
    alternatives: "Lựa chọn thay thế",
    pricing: PricingLabels {
        free: "Miễn phí",
        freemium: "Freemium",
        paid: "Trả phí",
        waitlist: "Danh sách chờ",
        open_source: "Mã nguồn mở",
    },
    cat: &[
        ("chatbot", "Chatbot"),
        ("writing", "Viết lách"),
        ("image", "Tạo hình ảnh"),
        ("video", "Video"),
        ("audio", "Âm thanh & Nhạc"),
        ("coding", "Lập trình"),
        ("productivity", "Năng suất"),
        ("research", "Nghiên cứu"),
    ],
};

pub(super) static ZH: Translations = Translations {
    search_placeholder: "搜索 AI 工具...",
    categories: "分类",
    all_tools: "所有工具",
    showing_results: "显示 {{count}} 个工具",
    no_tools_found: "未找到工具",
    no_tools_desc: "请尝试调整搜索词或分类筛选。",
    back_to_directory: "返回目录",
    visit_website: "访问网站",
    share: "分享",
    key_features: "主要功能",
    faq: "常见问题",
    is_free: "{{name}} 免费吗？",
    best_for: "{{name}} 最适合做什么？",
    answer_free: "是的，完全免费。",
    answer_paid: "不，这是付费工具，但可能提供试用。",
    answer_freemium: "提供功能有限的免费版，以及功能更强的付费方案。",
    answer_best_for: "根据其分类（{{category}}），最适合与{{topic}}相关的任务。",
    tags: "标签",
    alternatives: "替代工具",
    pricing: PricingLabels {
        free: "免费",
        freemium: "免费增值",
        paid: "付费",
        waitlist: "候补名单",
        open_source: "开源",
    },
    cat: &[
        ("chatbot", "聊天机器人"),
        ("writing", "写作"),
        ("image", "图像生成"),
        ("video", "视频"),
        ("audio", "音频与音乐"),
        ("coding", "编程"),
        ("productivity", "效率"),
        ("research", "研究"),
    ],
};

pub(super) static RU: Translations = Translations {
    search_placeholder: "Поиск AI-инструментов...",
    categories: "Категории",
    all_tools: "Все инструменты",
    showing_results: "Показано инструментов: {{count}}",
    no_tools_found: "Инструменты не найдены",
    no_tools_desc: "Попробуйте изменить запрос или фильтр категории.",
    back_to_directory: "Назад к каталогу",
    visit_website: "Перейти на сайт",
    share: "Поделиться",
    key_features: "Ключевые возможности",
    faq: "Частые вопросы",
    is_free: "{{name}} бесплатный?",
    best_for: "Для чего лучше всего подходит {{name}}?",
    answer_free: "Да, он полностью бесплатный.",
    answer_paid: "Нет, это платный инструмент, но может быть пробный период.",
    answer_freemium: "Есть бесплатный тариф с ограничениями и платные планы с расширенными возможностями.",
    answer_best_for: "Судя по категории ({{category}}), лучше всего подходит для задач, связанных с темой «{{topic}}».",
    tags: "Теги",
    alternatives: "Альтернативы",
    pricing: PricingLabels {
        free: "Бесплатно",
        freemium: "Freemium",
        paid: "Платно",
        waitlist: "Лист ожидания",
        open_source: "Открытый код",
    },
    cat: &[
        ("chatbot", "Чат-боты"),
        ("writing", "Тексты"),
        ("image", "Генерация изображений"),
        ("video", "Видео"),
        ("audio", "Аудио и музыка"),
        ("coding", "Программирование"),
        ("productivity", "Продуктивность"),
        ("research", "Исследования"),
    ],
};

pub(super) static TH: Translations = Translations {
    search_placeholder: "ค้นหาเครื่องมือ AI...",
    categories: "หมวดหมู่",
    all_tools: "เครื่องมือทั้งหมด",
    showing_results: "แสดง {{count}} เครื่องมือ",
    no_tools_found: "ไม่พบเครื่องมือ",
    no_tools_desc: "ลองปรับคำค้นหาหรือตัวกรองหมวดหมู่",
    back_to_directory: "กลับไปที่ไดเรกทอรี",
    visit_website: "เยี่ยมชมเว็บไซต์",
    share: "แชร์",
    key_features: "ฟีเจอร์หลัก",
    faq: "คำถามที่พบบ่อย",
    is_free: "{{name}} ใช้ฟรีหรือไม่?",
    best_for: "{{name}} เหมาะกับงานอะไรที่สุด?",
    answer_free: "ใช่ ใช้งานได้ฟรีทั้งหมด",
    answer_paid: "ไม่ เป็นเครื่องมือแบบเสียเงิน แต่อาจมีช่วงทดลองใช้",
    answer_freemium: "มีแพ็กเกจฟรีที่จำกัดฟีเจอร์ และแพ็กเกจเสียเงินสำหรับการใช้งานเต็มรูปแบบ",
    answer_best_for: "จากหมวดหมู่ ({{category}}) เหมาะที่สุดสำหรับงานด้าน{{topic}}",
    tags: "แท็ก",
    alternatives: "ทางเลือกอื่น",
    pricing: PricingLabels {
        free: "ฟรี",
        freemium: "ฟรีเมียม",
        paid: "เสียเงิน",
        waitlist: "รอคิว",
        open_source: "โอเพนซอร์ส",
    },
    cat: &[
        ("chatbot", "แชทบอท"),
        ("writing", "การเขียน"),
        ("image", "สร้างภาพ"),
        ("video", "วิดีโอ"),
        ("audio", "เสียงและเพลง"),
        ("coding", "เขียนโค้ด"),
        ("productivity", "เพิ่มประสิทธิภาพ"),
        ("research", "การวิจัย"),
    ],
};

pub(super) static JA: Translations = Translations {
    search_placeholder: "AIツールを検索...",
    categories: "カテゴリー",
    all_tools: "すべてのツール",
    showing_results: "{{count}} 件のツールを表示中",
    no_tools_found: "ツールが見つかりません",
    no_tools_desc: "検索語またはカテゴリーを変更してみてください。",
    back_to_directory: "ディレクトリに戻る",
    visit_website: "ウェブサイトを見る",
    share: "共有",
    key_features: "主な機能",
    faq: "よくある質問",
    is_free: "{{name}} は無料ですか？",
    best_for: "{{name}} は何に最適ですか？",
    answer_free: "はい、完全に無料です。",
    answer_paid: "いいえ、有料ツールですが、試用版がある場合があります。",
    answer_freemium: "機能が制限された無料プランと、より高機能な有料プランがあります。",
    answer_best_for: "カテゴリー（{{category}}）から見て、{{topic}}に関する作業に最適です。",
    tags: "タグ",
    alternatives: "代替ツール",
    pricing: PricingLabels {
        free: "無料",
        freemium: "フリーミアム",
        paid: "有料",
        waitlist: "順番待ち",
        open_source: "オープンソース",
    },
    cat: &[
        ("chatbot", "チャットボット"),
        ("writing", "ライティング"),
        ("image", "画像生成"),
        ("video", "動画"),
        ("audio", "音声・音楽"),
        ("coding", "コーディング"),
        ("productivity", "生産性"),
        ("research", "リサーチ"),
    ],
};

pub(super) static KO: Translations = Translations {
    search_placeholder: "AI 도구 검색...",
    categories: "카테고리",
    all_tools: "모든 도구",
    showing_results: "{{count}}개의 도구 표시 중",
    no_tools_found: "도구를 찾을 수 없습니다",
    no_tools_desc: "검색어나 카테고리 필터를 조정해 보세요.",
    back_to_directory: "디렉터리로 돌아가기",
    visit_website: "웹사이트 방문",
    share: "공유",
    key_features: "주요 기능",
    faq: "자주 묻는 질문",
    is_free: "{{name}}은(는) 무료인가요?",
    best_for: "{{name}}은(는) 어디에 가장 적합한가요?",
    answer_free: "네, 완전히 무료입니다.",
    answer_paid: "아니요, 유료 도구이지만 체험판을 제공할 수 있습니다.",
    answer_freemium: "기능이 제한된 무료 요금제와 더 강력한 유료 요금제가 있습니다.",
    answer_best_for: "카테고리({{category}})를 기준으로 {{topic}} 관련 작업에 가장 적합합니다.",
    tags: "태그",
    alternatives: "대안",
    pricing: PricingLabels {
        free: "무료",
        freemium: "부분 유료",
        paid: "유료",
        waitlist: "대기자 명단",
        open_source: "오픈 소스",
    },
    cat: &[
        ("chatbot", "챗봇"),
        ("writing", "글쓰기"),
        ("image", "이미지 생성"),
        ("video", "비디오"),
        ("audio", "오디오 및 음악"),
        ("coding", "코딩"),
        ("productivity", "생산성"),
        ("research", "리서치"),
    ],
};

pub(super) static FR: Translations = Translations {
    search_placeholder: "Rechercher des outils IA...",
    categories: "Catégories",
    all_tools: "Tous les outils",
    showing_results: "{{count}} outils affichés",
    no_tools_found: "Aucun outil trouvé",
    no_tools_desc: "Essayez de modifier votre recherche ou le filtre de catégorie.",
    back_to_directory: "Retour à l'annuaire",
    visit_website: "Visiter le site",
    share: "Partager",
    key_features: "Fonctionnalités clés",
    faq: "Questions fréquentes",
    is_free: "{{name}} est-il gratuit ?",
    best_for: "À quoi {{name}} est-il le plus adapté ?",
    answer_free: "Oui, il est entièrement gratuit.",
    answer_paid: "Non, c'est un outil payant, mais un essai peut être proposé.",
    answer_freemium: "Il propose une offre gratuite limitée et des formules payantes plus puissantes.",
    answer_best_for: "D'après sa catégorie ({{category}}), il est idéal pour les tâches liées à : {{topic}}.",
    tags: "Étiquettes",
    alternatives: "Alternatives",
    pricing: PricingLabels {
        free: "Gratuit",
        freemium: "Freemium",
        paid: "Payant",
        waitlist: "Liste d'attente",
        open_source: "Open source",
    },
    cat: &[
        ("chatbot", "Chatbots"),
        ("writing", "Rédaction"),
        ("image", "Génération d'images"),
        ("video", "Vidéo"),
        ("audio", "Audio et musique"),
        ("coding", "Programmation"),
        ("productivity", "Productivité"),
        ("research", "Recherche"),
    ],
};

pub(super) static DE: Translations = Translations {
    search_placeholder: "KI-Tools durchsuchen...",
    categories: "Kategorien",
    all_tools: "Alle Tools",
    showing_results: "{{count}} Tools werden angezeigt",
    no_tools_found: "Keine Tools gefunden",
    no_tools_desc: "Passe deine Suche oder den Kategoriefilter an.",
    back_to_directory: "Zurück zum Verzeichnis",
    visit_website: "Website besuchen",
    share: "Teilen",
    key_features: "Hauptfunktionen",
    faq: "Häufige Fragen",
    is_free: "Ist {{name}} kostenlos?",
    best_for: "Wofür eignet sich {{name}} am besten?",
    answer_free: "Ja, es ist komplett kostenlos.",
    answer_paid: "Nein, es ist ein kostenpflichtiges Tool, eventuell mit Testphase.",
    answer_freemium: "Es gibt eine kostenlose Version mit eingeschränkten Funktionen und leistungsstärkere Bezahlpläne.",
    answer_best_for: "Laut seiner Kategorie ({{category}}) eignet es sich am besten für Aufgaben rund um {{topic}}.",
    tags: "Tags",
    alternatives: "Alternativen",
    pricing: PricingLabels {
        free: "Kostenlos",
        freemium: "Freemium",
        paid: "Kostenpflichtig",
        waitlist: "Warteliste",
        open_source: "Open Source",
    },
    cat: &[
        ("chatbot", "Chatbots"),
        ("writing", "Schreiben"),
        ("image", "Bildgenerierung"),
        ("video", "Video"),
        ("audio", "Audio & Musik"),
        ("coding", "Programmierung"),
        ("productivity", "Produktivität"),
        ("research", "Recherche"),
    ],
};

pub(super) static ES: Translations = Translations {
    search_placeholder: "Buscar herramientas de IA...",
    categories: "Categorías",
    all_tools: "Todas las herramientas",
    showing_results: "Mostrando {{count}} herramientas",
    no_tools_found: "No se encontraron herramientas",
    no_tools_desc: "Prueba a ajustar la búsqueda o el filtro de categoría.",
    back_to_directory: "Volver al directorio",
    visit_website: "Visitar sitio web",
    share: "Compartir",
    key_features: "Características principales",
    faq: "Preguntas frecuentes",
    is_free: "¿{{name}} es gratis?",
    best_for: "¿Para qué es mejor {{name}}?",
    answer_free: "Sí, es completamente gratis.",
    answer_paid: "No, es una herramienta de pago, aunque puede ofrecer una prueba.",
    answer_freemium: "Ofrece un plan gratuito con funciones limitadas y planes de pago más potentes.",
    answer_best_for: "Según su categoría ({{category}}), es ideal para tareas relacionadas con {{topic}}.",
    tags: "Etiquetas",
    alternatives: "Alternativas",
    pricing: PricingLabels {
        free: "Gratis",
        freemium: "Freemium",
        paid: "De pago",
        waitlist: "Lista de espera",
        open_source: "Código abierto",
    },
    cat: &[
        ("chatbot", "Chatbots"),
        ("writing", "Escritura"),
        ("image", "Generación de imágenes"),
        ("video", "Vídeo"),
        ("audio", "Audio y música"),
        ("coding", "Programación"),
        ("productivity", "Productividad"),
        ("research", "Investigación"),
    ],
};
