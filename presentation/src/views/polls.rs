//! Index, detail and results views

use crate::output::formatter::{PageFormatter, formatter_for};
use crate::views::page::{IndexContext, Page};
use chrono::{DateTime, Utc};
use polls_application::{
    Clock, IndexParams, ListLatestQuestionsUseCase, ShowQuestionError, ShowQuestionUseCase,
};
use polls_domain::{OutputFormat, Question, QuestionId, QuestionRepository, RepositoryError};
use std::sync::Arc;
use tracing::debug;

/// The three poll pages
///
/// Unpublished questions are reported as not found, exactly like missing
/// ones. Storage failures are returned as errors rather than pages.
pub struct PollsViews<R: QuestionRepository + 'static, C: Clock + 'static> {
    list_latest: ListLatestQuestionsUseCase<R, C>,
    show: ShowQuestionUseCase<R, C>,
    clock: Arc<C>,
    formatter: Box<dyn PageFormatter>,
}

impl<R: QuestionRepository + 'static, C: Clock + 'static> PollsViews<R, C> {
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            list_latest: ListLatestQuestionsUseCase::new(
                Arc::clone(&repository),
                Arc::clone(&clock),
            ),
            show: ShowQuestionUseCase::new(repository, Arc::clone(&clock)),
            clock,
            formatter: formatter_for(OutputFormat::default()),
        }
    }

    pub fn with_index_params(mut self, params: IndexParams) -> Self {
        self.list_latest = self.list_latest.with_params(params);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.formatter = formatter_for(format);
        self
    }

    /// Latest published questions
    pub async fn index(&self) -> Result<Page<IndexContext>, RepositoryError> {
        let questions = self.list_latest.execute().await?;
        let body = self.formatter.format_index(&questions, self.clock.now());
        Ok(Page::ok(
            body,
            IndexContext {
                latest_question_list: questions,
            },
        ))
    }

    /// A single published question
    pub async fn detail(&self, id: QuestionId) -> Result<Page<Option<Question>>, RepositoryError> {
        self.lookup(id, |formatter, question, now| {
            formatter.format_detail(question, now)
        })
        .await
    }

    /// Results of a single published question
    pub async fn results(&self, id: QuestionId) -> Result<Page<Option<Question>>, RepositoryError> {
        self.lookup(id, |formatter, question, now| {
            formatter.format_results(question, now)
        })
        .await
    }

    async fn lookup<F>(
        &self,
        id: QuestionId,
        render: F,
    ) -> Result<Page<Option<Question>>, RepositoryError>
    where
        F: FnOnce(&dyn PageFormatter, &Question, DateTime<Utc>) -> String,
    {
        match self.show.execute(id).await {
            Ok(question) => {
                let body = render(self.formatter.as_ref(), &question, self.clock.now());
                Ok(Page::ok(body, Some(question)))
            }
            Err(ShowQuestionError::NotFound(id)) => {
                debug!("Rendering not-found page for question {}", id);
                Ok(Page::not_found(self.formatter.format_not_found(id), None))
            }
            Err(ShowQuestionError::Repository(e)) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::NO_POLLS_MESSAGE;
    use crate::views::page::StatusCode;
    use chrono::{Duration, TimeZone};
    use polls_application::FixedClock;
    use polls_domain::NewQuestion;
    use polls_infrastructure::InMemoryQuestionRepository;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    struct Client {
        repo: Arc<InMemoryQuestionRepository>,
        views: PollsViews<InMemoryQuestionRepository, FixedClock>,
    }

    impl Client {
        fn new() -> Self {
            let repo = Arc::new(InMemoryQuestionRepository::new());
            let views = PollsViews::new(Arc::clone(&repo), Arc::new(FixedClock::new(now())));
            Self { repo, views }
        }

        /// Create a question published `days` from now (negative for the past)
        async fn create_question(&self, question_text: &str, days: i64) -> Question {
            self.repo
                .create(NewQuestion::try_new(question_text, now() + Duration::days(days)).unwrap())
                .await
                .unwrap()
        }
    }

    // ==================== Index ====================

    #[tokio::test]
    async fn index_with_no_questions() {
        let client = Client::new();
        let page = client.views.index().await.unwrap();

        assert_eq!(page.status.code(), 200);
        assert!(page.contains(NO_POLLS_MESSAGE));
        assert!(page.context.latest_question_list.is_empty());
    }

    #[tokio::test]
    async fn index_hides_future_question() {
        let client = Client::new();
        client.create_question("Future question", 30).await;

        let page = client.views.index().await.unwrap();
        assert_eq!(page.status.code(), 200);
        assert!(page.contains(NO_POLLS_MESSAGE));
        assert!(page.context.latest_question_list.is_empty());
    }

    #[tokio::test]
    async fn index_shows_past_question() {
        let client = Client::new();
        let question = client.create_question("Past question", -30).await;

        let page = client.views.index().await.unwrap();
        assert_eq!(page.status.code(), 200);
        assert!(page.contains("Past question"));
        assert_eq!(page.context.latest_question_list, vec![question]);
    }

    #[tokio::test]
    async fn index_with_future_and_past_question_shows_only_past() {
        let client = Client::new();
        let past = client.create_question("Past question", -30).await;
        client.create_question("Future question", 30).await;

        let page = client.views.index().await.unwrap();
        assert_eq!(page.context.latest_question_list, vec![past]);
        assert!(!page.contains("Future question"));
    }

    #[tokio::test]
    async fn index_with_two_past_questions() {
        let client = Client::new();
        let first = client.create_question("Past question 1", -30).await;
        let second = client.create_question("Past question 2", -40).await;

        let page = client.views.index().await.unwrap();
        assert_eq!(page.context.latest_question_list, vec![first, second]);
    }

    #[tokio::test]
    async fn index_with_two_future_questions() {
        let client = Client::new();
        client.create_question("Future question 1", 30).await;
        client.create_question("Future question 2", 40).await;

        let page = client.views.index().await.unwrap();
        assert!(page.context.latest_question_list.is_empty());
    }

    #[tokio::test]
    async fn index_respects_latest_limit() {
        let repo = Arc::new(InMemoryQuestionRepository::new());
        let views = PollsViews::new(Arc::clone(&repo), Arc::new(FixedClock::new(now())))
            .with_index_params(IndexParams::default().with_latest_limit(2));
        for day in 1..=4 {
            let question = NewQuestion::try_new(format!("Q{}", day), now() - Duration::days(day));
            repo.create(question.unwrap()).await.unwrap();
        }

        let page = views.index().await.unwrap();
        let texts: Vec<&str> = page
            .context
            .latest_question_list
            .iter()
            .map(|q| q.question_text.as_str())
            .collect();
        assert_eq!(texts, vec!["Q1", "Q2"]);
    }

    // ==================== Detail ====================

    #[tokio::test]
    async fn detail_of_future_question_is_not_found() {
        let client = Client::new();
        let future = client.create_question("Future question", 30).await;

        let page = client.views.detail(future.id).await.unwrap();
        assert_eq!(page.status.code(), 404);
        assert!(page.context.is_none());
        assert!(!page.contains("Future question"));
    }

    #[tokio::test]
    async fn detail_of_past_question_shows_text() {
        let client = Client::new();
        let past = client.create_question("Past question", -30).await;

        let page = client.views.detail(past.id).await.unwrap();
        assert_eq!(page.status, StatusCode::Ok);
        assert!(page.contains(&past.question_text));
        assert_eq!(page.context, Some(past));
    }

    #[tokio::test]
    async fn detail_of_missing_question_is_not_found() {
        let client = Client::new();
        let page = client.views.detail(QuestionId::new(1)).await.unwrap();
        assert_eq!(page.status, StatusCode::NotFound);
    }

    // ==================== Results ====================

    #[tokio::test]
    async fn results_of_future_question_is_not_found() {
        let client = Client::new();
        let future = client.create_question("Future question", 30).await;

        let page = client.views.results(future.id).await.unwrap();
        assert_eq!(page.status.code(), 404);
    }

    #[tokio::test]
    async fn results_of_past_question_shows_text() {
        let client = Client::new();
        let past = client.create_question("Past question", -30).await;

        let page = client.views.results(past.id).await.unwrap();
        assert_eq!(page.status.code(), 200);
        assert!(page.contains(&past.question_text));
    }

    // ==================== Formats ====================

    #[tokio::test]
    async fn json_index_with_no_questions() {
        let repo = Arc::new(InMemoryQuestionRepository::new());
        let views = PollsViews::new(repo, Arc::new(FixedClock::new(now())))
            .with_format(OutputFormat::Json);

        let page = views.index().await.unwrap();
        assert_eq!(page.status.code(), 200);
        assert!(page.contains(NO_POLLS_MESSAGE));
        assert!(page.context.latest_question_list.is_empty());
    }

    #[tokio::test]
    async fn json_index_hides_future_question() {
        let repo = Arc::new(InMemoryQuestionRepository::new());
        let views = PollsViews::new(Arc::clone(&repo), Arc::new(FixedClock::new(now())))
            .with_format(OutputFormat::Json);
        repo.create(NewQuestion::try_new("Future question", now() + Duration::days(30)).unwrap())
            .await
            .unwrap();

        let page = views.index().await.unwrap();
        assert!(page.contains(NO_POLLS_MESSAGE));
        assert!(!page.contains("Future question"));
    }

    #[tokio::test]
    async fn json_index_lists_visible_questions() {
        let repo = Arc::new(InMemoryQuestionRepository::new());
        let views = PollsViews::new(Arc::clone(&repo), Arc::new(FixedClock::new(now())))
            .with_format(OutputFormat::Json);
        repo.create(NewQuestion::try_new("Past question", now() - Duration::days(30)).unwrap())
            .await
            .unwrap();

        let page = views.index().await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&page.body).unwrap();
        assert_eq!(value["latest_question_list"][0]["question_text"], "Past question");
    }
}
