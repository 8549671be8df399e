//! Лайки, шаринг и комментарии под постами.
//!
//! Каждый клик обрабатывается независимо, без debounce: повторные клики
//! отправляют повторные запросы. Ответ сервера со статусом `success`
//! считается истиной и перезаписывает состояние кнопки (без оптимистичного
//! обновления). Запросы нумеруются для каждой кнопки лайка (и для каждого
//! поста при шаринге), и ответ, который пришёл после более нового запроса,
//! отбрасывается.
//!
//! Классы ошибок:
//! - нет `data-post-id` или кнопка отключена: сообщение без запроса;
//! - сервер ответил не `success`: его текст или общий fallback;
//! - сеть или нечитаемый ответ: одно общее «ошибка соединения».

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::csrf::CsrfToken;
use crate::error::{ApiError, InteractionError, messages};
use crate::models::{LikeResponse, PostId, Severity, SharePayload, ShareResponse};
use crate::notify::Notifier;
use crate::timing::Delay;

/// Значение `fill` иконки, когда лайк стоит.
pub const ICON_FILL_LIKED: &str = "currentColor";
/// Значение `fill` иконки, когда лайка нет.
pub const ICON_FILL_UNLIKED: &str = "none";

/// Серверные вызовы, которые нужны кнопкам под постом.
#[async_trait(?Send)]
pub trait InteractionApi {
    /// `POST /api/post/{id}/like/`. Тело разбирается при любом HTTP-статусе.
    async fn like(
        &self,
        post_id: &PostId,
        csrf: Option<&CsrfToken>,
    ) -> Result<LikeResponse, ApiError>;

    /// `GET /api/post/{id}/share/`.
    async fn share(&self, post_id: &PostId) -> Result<ShareResponse, ApiError>;
}

/// Кнопка лайка на странице.
pub trait LikeControl {
    /// Номер кнопки, уникальный среди кнопок лайка на странице. У одного
    /// поста может быть несколько кнопок.
    fn control_id(&self) -> u64;
    /// Сырое значение `data-post-id`.
    fn post_id(&self) -> Option<String>;
    /// Кнопка отключена (сервер так рендерит её для анонимов).
    fn is_disabled(&self) -> bool;
    /// Включает или снимает анимацию пульсации.
    fn set_pulsing(&self, pulsing: bool);
    /// Приводит иконку, подсветку и счётчик к ответу сервера.
    fn render(&self, view: &LikeView);
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Состояние кнопки лайка по ответу сервера.
pub struct LikeView {
    /// Подсветка кнопки.
    pub liked: bool,
    /// Атрибут `fill` иконки.
    pub icon_fill: &'static str,
    /// Текст счётчика.
    pub count_text: String,
}

impl From<&LikeResponse> for LikeView {
    fn from(resp: &LikeResponse) -> Self {
        Self {
            liked: resp.liked,
            icon_fill: if resp.liked { ICON_FILL_LIKED } else { ICON_FILL_UNLIKED },
            count_text: resp.likes_count.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Почему не сработал нативный шаринг.
pub enum NativeShareError {
    /// Пользователь закрыл диалог (`AbortError`).
    Cancelled,
    /// Любая другая ошибка платформы.
    Failed(String),
}

/// Возможности платформы для шаринга ссылки.
#[async_trait(?Send)]
pub trait SharePlatform {
    /// Есть ли нативный шаринг (`navigator.share`).
    fn can_share(&self) -> bool;
    /// Открывает нативный диалог.
    async fn share(&self, payload: &SharePayload) -> Result<(), NativeShareError>;
    /// Записывает текст в буфер обмена.
    async fn copy_to_clipboard(&self, text: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Результат обработки клика по лайку.
pub enum LikeOutcome {
    /// Ответ применён к кнопке.
    Applied(LikeView),
    /// Пока запрос шёл, с этой кнопки ушёл более новый; ответ отброшен.
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Результат обработки клика по шарингу.
pub enum ShareOutcome {
    /// Отработал нативный диалог.
    Shared,
    /// Ссылка скопирована в буфер обмена.
    Copied,
    /// Ответ устарел и отброшен.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Ticket<K> {
    key: K,
    seq: u64,
}

#[derive(Debug)]
/// Нумерация запросов по ключу: актуален только последний выданный номер.
struct RequestSequencer<K> {
    next: Cell<u64>,
    latest: RefCell<HashMap<K, u64>>,
}

impl<K> Default for RequestSequencer<K> {
    fn default() -> Self {
        Self {
            next: Cell::new(0),
            latest: RefCell::new(HashMap::new()),
        }
    }
}

impl<K: Clone + Eq + Hash> RequestSequencer<K> {
    fn begin(&self, key: &K) -> Ticket<K> {
        let seq = self.next.get() + 1;
        self.next.set(seq);
        self.latest.borrow_mut().insert(key.clone(), seq);
        Ticket {
            key: key.clone(),
            seq,
        }
    }

    fn is_current(&self, ticket: &Ticket<K>) -> bool {
        self.latest.borrow().get(&ticket.key) == Some(&ticket.seq)
    }
}

/// Обработчики кнопок `.like-btn`, `.share-btn`, `.comment-btn`.
pub struct InteractionController<A, P, D> {
    api: A,
    platform: P,
    delay: D,
    notifier: Rc<dyn Notifier>,
    csrf: Option<CsrfToken>,
    pulse_duration: Duration,
    likes: RequestSequencer<u64>,
    shares: RequestSequencer<PostId>,
}

impl<A, P, D> InteractionController<A, P, D>
where
    A: InteractionApi,
    P: SharePlatform,
    D: Delay,
{
    /// Создаёт контроллер. Токен определяется один раз на загрузку страницы.
    pub fn new(
        api: A,
        platform: P,
        delay: D,
        notifier: Rc<dyn Notifier>,
        csrf: Option<CsrfToken>,
        pulse_duration: Duration,
    ) -> Self {
        debug!(csrf = csrf.is_some(), "interactions initialised");
        Self {
            api,
            platform,
            delay,
            notifier,
            csrf,
            pulse_duration,
            likes: RequestSequencer::default(),
            shares: RequestSequencer::default(),
        }
    }

    /// Клик по лайку.
    ///
    /// Класс пульсации снимается через `pulse_duration` при любом исходе
    /// после отправки запроса.
    pub async fn handle_like<C: LikeControl>(
        &self,
        control: &C,
    ) -> Result<LikeOutcome, InteractionError> {
        let Some(post_id) = PostId::parse(control.post_id().as_deref()) else {
            return Err(self.report(InteractionError::MissingPostId, messages::LIKE_FAILED));
        };
        if control.is_disabled() {
            return Err(self.report(InteractionError::LoginRequired, messages::LIKE_FAILED));
        }

        control.set_pulsing(true);
        let ticket = self.likes.begin(&control.control_id());
        let result = self.api.like(&post_id, self.csrf.as_ref()).await;

        let outcome = if self.likes.is_current(&ticket) {
            self.apply_like(control, result)
        } else {
            debug!(
                post_id = %post_id,
                control = ticket.key,
                seq = ticket.seq,
                "dropping stale like response"
            );
            Ok(LikeOutcome::Stale)
        };

        self.delay.sleep(self.pulse_duration).await;
        control.set_pulsing(false);
        outcome
    }

    fn apply_like<C: LikeControl>(
        &self,
        control: &C,
        result: Result<LikeResponse, ApiError>,
    ) -> Result<LikeOutcome, InteractionError> {
        let resp = result.map_err(|err| self.report(err.into(), messages::LIKE_FAILED))?;
        if !resp.is_success() {
            let err = InteractionError::Rejected {
                message: resp.message,
            };
            return Err(self.report(err, messages::LIKE_FAILED));
        }

        let view = LikeView::from(&resp);
        control.render(&view);

        let fallback = if resp.liked { messages::LIKED } else { messages::UNLIKED };
        let message = resp.message.as_deref().unwrap_or(fallback);
        self.notifier.notify(message, Severity::Success);
        Ok(LikeOutcome::Applied(view))
    }

    /// Клик по шарингу: нативный диалог, а если его нет или пользователь
    /// его закрыл, копирование ссылки.
    pub async fn handle_share(
        &self,
        raw_post_id: Option<&str>,
    ) -> Result<ShareOutcome, InteractionError> {
        let Some(post_id) = PostId::parse(raw_post_id) else {
            return Err(self.report(InteractionError::MissingPostId, messages::SHARE_FAILED));
        };

        let ticket = self.shares.begin(&post_id);
        let result = self.api.share(&post_id).await;
        if !self.shares.is_current(&ticket) {
            debug!(post_id = %post_id, seq = ticket.seq, "dropping stale share response");
            return Ok(ShareOutcome::Stale);
        }

        let resp = result.map_err(|err| self.report(err.into(), messages::SHARE_FAILED))?;
        let url = match (resp.is_success(), resp.url) {
            (true, Some(url)) if !url.trim().is_empty() => url,
            // успех без ссылки: текст сервера описывает успех, показываем общий
            (true, _) => {
                warn!(post_id = %post_id, "share response has no url");
                let err = InteractionError::Rejected { message: None };
                return Err(self.report(err, messages::SHARE_FAILED));
            }
            (false, _) => {
                let err = InteractionError::Rejected {
                    message: resp.message,
                };
                return Err(self.report(err, messages::SHARE_FAILED));
            }
        };

        if !self.platform.can_share() {
            return self.copy_link(&url).await;
        }

        let payload = SharePayload {
            title: resp.title.unwrap_or_default(),
            text: resp.message.unwrap_or_default(),
            url,
        };
        match self.platform.share(&payload).await {
            Ok(()) => Ok(ShareOutcome::Shared),
            Err(NativeShareError::Cancelled) => {
                debug!(post_id = %post_id, "native share cancelled, copying link");
                self.copy_link(&payload.url).await
            }
            Err(NativeShareError::Failed(reason)) => {
                warn!(post_id = %post_id, %reason, "native share failed, copying link");
                self.copy_link(&payload.url).await
            }
        }
    }

    async fn copy_link(&self, url: &str) -> Result<ShareOutcome, InteractionError> {
        self.platform
            .copy_to_clipboard(url)
            .await
            .map_err(|reason| self.report(InteractionError::Clipboard(reason), messages::SHARE_FAILED))?;
        self.notifier.notify(messages::LINK_COPIED, Severity::Success);
        Ok(ShareOutcome::Copied)
    }

    /// Клик по комментариям: раздел ещё не готов, запроса нет.
    pub fn handle_comment(&self) {
        self.notifier
            .notify(messages::COMMENTS_IN_DEVELOPMENT, Severity::Info);
    }

    fn report(&self, err: InteractionError, fallback: &'static str) -> InteractionError {
        match &err {
            InteractionError::Connection(cause) => warn!(error = %cause, "interaction request failed"),
            other => debug!(error = %other, "interaction rejected"),
        }
        self.notifier.notify(&err.user_message(fallback), Severity::Error);
        err
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use tokio::sync::oneshot;

    use super::*;

    #[derive(Default)]
    struct RecordingNotifier {
        seen: RefCell<Vec<(String, Severity)>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str, severity: Severity) {
            self.seen.borrow_mut().push((message.to_string(), severity));
        }
    }

    type Reply<T> = oneshot::Receiver<Result<T, ApiError>>;

    #[derive(Default)]
    struct FakeApi {
        likes: RefCell<VecDeque<Reply<LikeResponse>>>,
        shares: RefCell<VecDeque<Reply<ShareResponse>>>,
        like_calls: RefCell<Vec<(String, Option<String>)>>,
        share_calls: Cell<usize>,
    }

    impl FakeApi {
        fn reply_like(&self, reply: Result<LikeResponse, ApiError>) {
            let (tx, rx) = oneshot::channel();
            let _ = tx.send(reply);
            self.likes.borrow_mut().push_back(rx);
        }

        fn pending_like(&self) -> oneshot::Sender<Result<LikeResponse, ApiError>> {
            let (tx, rx) = oneshot::channel();
            self.likes.borrow_mut().push_back(rx);
            tx
        }

        fn reply_share(&self, reply: Result<ShareResponse, ApiError>) {
            let (tx, rx) = oneshot::channel();
            let _ = tx.send(reply);
            self.shares.borrow_mut().push_back(rx);
        }
    }

    #[async_trait(?Send)]
    impl InteractionApi for Rc<FakeApi> {
        async fn like(
            &self,
            post_id: &PostId,
            csrf: Option<&CsrfToken>,
        ) -> Result<LikeResponse, ApiError> {
            self.like_calls.borrow_mut().push((
                post_id.to_string(),
                csrf.map(|token| token.as_str().to_string()),
            ));
            let rx = self.likes.borrow_mut().pop_front().expect("unexpected like call");
            rx.await.expect("reply sender dropped")
        }

        async fn share(&self, _post_id: &PostId) -> Result<ShareResponse, ApiError> {
            self.share_calls.set(self.share_calls.get() + 1);
            let rx = self.shares.borrow_mut().pop_front().expect("unexpected share call");
            rx.await.expect("reply sender dropped")
        }
    }

    #[derive(Default)]
    struct FakePlatform {
        native: bool,
        native_result: RefCell<Option<NativeShareError>>,
        clipboard_fails: bool,
        shared: RefCell<Vec<SharePayload>>,
        clipboard: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl SharePlatform for Rc<FakePlatform> {
        fn can_share(&self) -> bool {
            self.native
        }

        async fn share(&self, payload: &SharePayload) -> Result<(), NativeShareError> {
            self.shared.borrow_mut().push(payload.clone());
            match self.native_result.borrow().clone() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }

        async fn copy_to_clipboard(&self, text: &str) -> Result<(), String> {
            if self.clipboard_fails {
                return Err("NotAllowedError".to_string());
            }
            self.clipboard.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingDelay {
        slept: RefCell<Vec<Duration>>,
    }

    #[async_trait(?Send)]
    impl Delay for Rc<RecordingDelay> {
        async fn sleep(&self, duration: Duration) {
            self.slept.borrow_mut().push(duration);
        }
    }

    #[derive(Default)]
    struct FakeButton {
        id: u64,
        post_id: Option<String>,
        disabled: bool,
        pulsing: Cell<bool>,
        pulse_history: RefCell<Vec<bool>>,
        highlighted: Cell<bool>,
        icon_fill: RefCell<String>,
        count_text: RefCell<String>,
    }

    impl FakeButton {
        fn for_post(id: &str) -> Self {
            Self {
                post_id: Some(id.to_string()),
                count_text: RefCell::new("4".to_string()),
                icon_fill: RefCell::new(ICON_FILL_UNLIKED.to_string()),
                ..Self::default()
            }
        }
    }

    impl LikeControl for FakeButton {
        fn control_id(&self) -> u64 {
            self.id
        }

        fn post_id(&self) -> Option<String> {
            self.post_id.clone()
        }

        fn is_disabled(&self) -> bool {
            self.disabled
        }

        fn set_pulsing(&self, pulsing: bool) {
            self.pulsing.set(pulsing);
            self.pulse_history.borrow_mut().push(pulsing);
        }

        fn render(&self, view: &LikeView) {
            self.highlighted.set(view.liked);
            *self.icon_fill.borrow_mut() = view.icon_fill.to_string();
            *self.count_text.borrow_mut() = view.count_text.clone();
        }
    }

    struct Harness {
        api: Rc<FakeApi>,
        platform: Rc<FakePlatform>,
        delay: Rc<RecordingDelay>,
        notifier: Rc<RecordingNotifier>,
        controller: InteractionController<Rc<FakeApi>, Rc<FakePlatform>, Rc<RecordingDelay>>,
    }

    fn harness(platform: FakePlatform) -> Harness {
        let api = Rc::new(FakeApi::default());
        let platform = Rc::new(platform);
        let delay = Rc::new(RecordingDelay::default());
        let notifier = Rc::new(RecordingNotifier::default());
        let controller = InteractionController::new(
            Rc::clone(&api),
            Rc::clone(&platform),
            Rc::clone(&delay),
            notifier.clone() as Rc<dyn Notifier>,
            CsrfToken::new("tok"),
            Duration::from_millis(300),
        );
        Harness {
            api,
            platform,
            delay,
            notifier,
            controller,
        }
    }

    fn like_success(liked: bool, count: i64, message: &str) -> LikeResponse {
        LikeResponse {
            status: "success".to_string(),
            liked,
            likes_count: count,
            message: Some(message.to_string()),
        }
    }

    fn last_notice(h: &Harness) -> (String, Severity) {
        h.notifier.seen.borrow().last().cloned().expect("a notification")
    }

    #[tokio::test]
    async fn successful_like_renders_server_state() {
        let h = harness(FakePlatform::default());
        h.api.reply_like(Ok(like_success(true, 5, "Curtido!")));
        let button = FakeButton::for_post("7");

        let outcome = h.controller.handle_like(&button).await.expect("like");

        assert!(matches!(outcome, LikeOutcome::Applied(_)));
        assert_eq!(*button.icon_fill.borrow(), "currentColor");
        assert_eq!(*button.count_text.borrow(), "5");
        assert!(button.highlighted.get());
        assert_eq!(last_notice(&h), ("Curtido!".to_string(), Severity::Success));
        assert_eq!(
            *h.api.like_calls.borrow(),
            vec![("7".to_string(), Some("tok".to_string()))]
        );
    }

    #[tokio::test]
    async fn unlike_clears_highlight_and_fill() {
        let h = harness(FakePlatform::default());
        h.api.reply_like(Ok(like_success(false, 3, "Curtida removida!")));
        let button = FakeButton::for_post("7");
        button.highlighted.set(true);

        h.controller.handle_like(&button).await.expect("unlike");

        assert!(!button.highlighted.get());
        assert_eq!(*button.icon_fill.borrow(), "none");
        assert_eq!(*button.count_text.borrow(), "3");
    }

    #[tokio::test]
    async fn missing_post_id_sends_nothing() {
        let h = harness(FakePlatform::default());
        let button = FakeButton::default();

        let err = h.controller.handle_like(&button).await.unwrap_err();

        assert_eq!(err, InteractionError::MissingPostId);
        assert!(h.api.like_calls.borrow().is_empty());
        assert_eq!(last_notice(&h).1, Severity::Error);
        assert!(button.pulse_history.borrow().is_empty());
    }

    #[tokio::test]
    async fn disabled_button_sends_nothing() {
        let h = harness(FakePlatform::default());
        let button = FakeButton {
            disabled: true,
            ..FakeButton::for_post("7")
        };

        let err = h.controller.handle_like(&button).await.unwrap_err();

        assert_eq!(err, InteractionError::LoginRequired);
        assert!(h.api.like_calls.borrow().is_empty());
        assert_eq!(
            last_notice(&h),
            (messages::LOGIN_REQUIRED.to_string(), Severity::Error)
        );
    }

    #[tokio::test]
    async fn server_rejection_shows_server_text_and_keeps_ui() {
        let h = harness(FakePlatform::default());
        h.api.reply_like(Ok(LikeResponse {
            status: "error".to_string(),
            message: Some("Erro ao processar curtida".to_string()),
            ..LikeResponse::default()
        }));
        let button = FakeButton::for_post("7");

        let err = h.controller.handle_like(&button).await.unwrap_err();

        assert!(matches!(err, InteractionError::Rejected { .. }));
        assert_eq!(*button.count_text.borrow(), "4");
        assert_eq!(
            last_notice(&h),
            ("Erro ao processar curtida".to_string(), Severity::Error)
        );
    }

    #[tokio::test]
    async fn transport_failure_is_generic_and_pulse_is_still_removed() {
        let h = harness(FakePlatform::default());
        h.api.reply_like(Err(ApiError::Decode("expected value at line 1".into())));
        let button = FakeButton::for_post("7");

        let err = h.controller.handle_like(&button).await.unwrap_err();

        assert!(matches!(err, InteractionError::Connection(_)));
        assert_eq!(
            last_notice(&h),
            (messages::CONNECTION_ERROR.to_string(), Severity::Error)
        );
        assert_eq!(*button.pulse_history.borrow(), vec![true, false]);
        assert_eq!(*h.delay.slept.borrow(), vec![Duration::from_millis(300)]);
    }

    #[tokio::test]
    async fn older_response_resolving_last_is_discarded() {
        let h = harness(FakePlatform::default());
        let first = h.api.pending_like();
        let second = h.api.pending_like();
        let button = FakeButton::for_post("7");

        let (r1, r2, ()) = tokio::join!(
            h.controller.handle_like(&button),
            h.controller.handle_like(&button),
            async {
                let _ = second.send(Ok(like_success(true, 6, "Curtido!")));
                tokio::task::yield_now().await;
                let _ = first.send(Ok(like_success(false, 5, "Curtida removida!")));
            }
        );

        assert_eq!(r1.expect("first"), LikeOutcome::Stale);
        assert!(matches!(r2.expect("second"), LikeOutcome::Applied(_)));
        assert_eq!(*button.count_text.borrow(), "6");
        assert!(button.highlighted.get());
        assert_eq!(h.notifier.seen.borrow().len(), 1);
        assert!(!button.pulsing.get());
    }

    #[tokio::test]
    async fn two_buttons_of_one_post_each_render_their_own_response() {
        let h = harness(FakePlatform::default());
        let first = h.api.pending_like();
        let second = h.api.pending_like();
        let feed = FakeButton::for_post("7");
        let featured = FakeButton {
            id: 1,
            ..FakeButton::for_post("7")
        };

        let (r1, r2, ()) = tokio::join!(
            h.controller.handle_like(&feed),
            h.controller.handle_like(&featured),
            async {
                let _ = second.send(Ok(like_success(true, 6, "Curtido!")));
                tokio::task::yield_now().await;
                let _ = first.send(Ok(like_success(true, 6, "Curtido!")));
            }
        );

        assert!(matches!(r1.expect("feed"), LikeOutcome::Applied(_)));
        assert!(matches!(r2.expect("featured"), LikeOutcome::Applied(_)));
        for button in [&feed, &featured] {
            assert_eq!(*button.count_text.borrow(), "6");
            assert!(button.highlighted.get());
            assert_eq!(*button.icon_fill.borrow(), ICON_FILL_LIKED);
        }
    }

    fn share_success(url: &str) -> ShareResponse {
        ShareResponse {
            status: "success".to_string(),
            title: Some("Novo devlog".to_string()),
            message: Some("Confira esta notícia: Novo devlog".to_string()),
            url: Some(url.to_string()),
        }
    }

    #[tokio::test]
    async fn share_without_native_api_copies_exact_url() {
        let h = harness(FakePlatform::default());
        h.api.reply_share(Ok(share_success("https://x/1")));

        let outcome = h.controller.handle_share(Some("1")).await.expect("share");

        assert_eq!(outcome, ShareOutcome::Copied);
        assert_eq!(*h.platform.clipboard.borrow(), vec!["https://x/1".to_string()]);
        assert_eq!(
            last_notice(&h),
            (messages::LINK_COPIED.to_string(), Severity::Success)
        );
    }

    #[tokio::test]
    async fn native_share_passes_server_fields() {
        let h = harness(FakePlatform {
            native: true,
            ..FakePlatform::default()
        });
        h.api.reply_share(Ok(share_success("https://x/2")));

        let outcome = h.controller.handle_share(Some("2")).await.expect("share");

        assert_eq!(outcome, ShareOutcome::Shared);
        let shared = h.platform.shared.borrow();
        assert_eq!(shared[0].url, "https://x/2");
        assert_eq!(shared[0].title, "Novo devlog");
        assert!(h.platform.clipboard.borrow().is_empty());
        assert!(h.notifier.seen.borrow().is_empty());
    }

    #[tokio::test]
    async fn cancelled_native_share_falls_back_to_clipboard() {
        let h = harness(FakePlatform {
            native: true,
            native_result: RefCell::new(Some(NativeShareError::Cancelled)),
            ..FakePlatform::default()
        });
        h.api.reply_share(Ok(share_success("https://x/3")));

        let outcome = h.controller.handle_share(Some("3")).await.expect("share");

        assert_eq!(outcome, ShareOutcome::Copied);
        assert_eq!(*h.platform.clipboard.borrow(), vec!["https://x/3".to_string()]);
    }

    #[tokio::test]
    async fn clipboard_failure_reports_share_error() {
        let h = harness(FakePlatform {
            clipboard_fails: true,
            ..FakePlatform::default()
        });
        h.api.reply_share(Ok(share_success("https://x/4")));

        let err = h.controller.handle_share(Some("4")).await.unwrap_err();

        assert!(matches!(err, InteractionError::Clipboard(_)));
        assert_eq!(
            last_notice(&h),
            (messages::SHARE_FAILED.to_string(), Severity::Error)
        );
    }

    #[tokio::test]
    async fn rejected_share_uses_fallback_text() {
        let h = harness(FakePlatform::default());
        h.api.reply_share(Ok(ShareResponse {
            status: "error".to_string(),
            ..ShareResponse::default()
        }));

        let err = h.controller.handle_share(Some("5")).await.unwrap_err();

        assert_eq!(err, InteractionError::Rejected { message: None });
        assert_eq!(
            last_notice(&h),
            (messages::SHARE_FAILED.to_string(), Severity::Error)
        );
    }

    #[tokio::test]
    async fn success_share_without_url_reports_generic_failure() {
        let h = harness(FakePlatform::default());
        h.api.reply_share(Ok(ShareResponse {
            status: "success".to_string(),
            message: Some("Confira".to_string()),
            ..ShareResponse::default()
        }));

        let err = h.controller.handle_share(Some("6")).await.unwrap_err();

        assert_eq!(err, InteractionError::Rejected { message: None });
        assert_eq!(
            *h.notifier.seen.borrow(),
            vec![(messages::SHARE_FAILED.to_string(), Severity::Error)]
        );
        assert!(h.platform.clipboard.borrow().is_empty());
    }

    #[tokio::test]
    async fn share_without_post_id_sends_nothing() {
        let h = harness(FakePlatform::default());

        let err = h.controller.handle_share(None).await.unwrap_err();

        assert_eq!(err, InteractionError::MissingPostId);
        assert_eq!(h.api.share_calls.get(), 0);
    }

    #[test]
    fn comment_reports_feature_in_development() {
        let h = harness(FakePlatform::default());

        h.controller.handle_comment();

        assert_eq!(
            last_notice(&h),
            (messages::COMMENTS_IN_DEVELOPMENT.to_string(), Severity::Info)
        );
    }
}
