use clap::{Args, Subcommand};
use std::io::{self, BufRead, Write};

use sevenk::models::{DifficultyFilter, Question};
use sevenk::quiz::{AnswerOutcome, QuestionBank, QuizEngine};
use sevenk::stats::average_quiz_score;
use sevenk::storage::FileStore;
use sevenk::Workspace;

use super::{CommandResult, OutputFormat};
use crate::config::Config;

#[derive(Args)]
pub struct QuizCommand {
    #[command(subcommand)]
    pub command: QuizSubcommand,
}

#[derive(Subcommand)]
pub enum QuizSubcommand {
    /// List the subjects in the question bank
    Subjects,

    /// Take a quiz, answering on stdin
    Start {
        /// Subject to be quizzed on
        subject: String,

        /// Difficulty: all, easy, medium, hard
        #[arg(long, short, default_value = "all")]
        difficulty: DifficultyFilter,
    },

    /// Show past quiz results
    History {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl QuizCommand {
    pub fn run(&self, workspace: &Workspace<FileStore>, config: &Config) -> CommandResult {
        match &self.command {
            QuizSubcommand::Subjects => {
                let bank = load_bank(config)?;
                for subject in bank.subjects() {
                    let count = bank.select(subject, DifficultyFilter::All).len();
                    println!("{:<20} {} question(s)", subject, count);
                }
                Ok(())
            }

            QuizSubcommand::Start {
                subject,
                difficulty,
            } => {
                let mut engine = QuizEngine::new(load_bank(config)?);
                let mut question = engine.start_quiz(subject, *difficulty)?.clone();
                let stdin = io::stdin();
                let mut input = stdin.lock();
                let mut number = 1;

                let result = loop {
                    print_question(number, &question);
                    let choice = prompt_choice(&mut input, question.options.len())?;

                    match engine.answer_question(choice)? {
                        AnswerOutcome::Next { index } => {
                            number = index + 1;
                            question = engine
                                .current_question()
                                .cloned()
                                .ok_or("Quiz ended unexpectedly")?;
                        }
                        AnswerOutcome::Completed(result) => break result,
                    }
                };

                let result = workspace.quiz_history().record_quiz(result)?;
                println!(
                    "\nQuiz complete: {}/{} ({}%) in {} min",
                    result.score, result.total_questions, result.percentage, result.time_spent
                );

                if let Some(review) = engine.review() {
                    println!("\nReview");
                    println!("======");
                    for (i, item) in review.iter().enumerate() {
                        let mark = if item.is_correct { "correct" } else { "wrong" };
                        println!("{}. {} [{}]", i + 1, item.question.question, mark);
                        if !item.is_correct {
                            println!("   Your answer: {}", item.chosen_option().unwrap_or("-"));
                            println!("   Correct:     {}", item.correct_option().unwrap_or("-"));
                        }
                        if !item.question.explanation.is_empty() {
                            println!("   {}", item.question.explanation);
                        }
                    }
                }
                Ok(())
            }

            QuizSubcommand::History { format } => {
                let history = workspace.quiz_history().load_all()?;

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&history)?);
                    }
                    OutputFormat::Text => {
                        if history.is_empty() {
                            println!("No quizzes taken yet");
                            return Ok(());
                        }
                        for result in &history {
                            println!("{}", result);
                        }
                        println!("\nAverage score: {}%", average_quiz_score(&history));
                    }
                }
                Ok(())
            }
        }
    }
}

fn load_bank(config: &Config) -> Result<QuestionBank, sevenk::Error> {
    match &config.question_bank.value {
        Some(path) => QuestionBank::load(path),
        None => Ok(QuestionBank::builtin()),
    }
}

fn print_question(number: usize, question: &Question) {
    println!("\nQ{}. {}", number, question.question);
    for (i, option) in question.options.iter().enumerate() {
        println!("  {}) {}", i + 1, option);
    }
}

/// Reads a 1-based option number, asking again until it is valid.
fn prompt_choice(
    input: &mut impl BufRead,
    options: usize,
) -> Result<usize, Box<dyn std::error::Error>> {
    if options == 0 {
        return Err("Question has no options to choose from".into());
    }
    loop {
        print!("Answer [1-{}]: ", options);
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err("Quiz abandoned".into());
        }
        match line.trim().parse::<usize>() {
            Ok(n) if (1..=options).contains(&n) => return Ok(n - 1),
            _ => println!("Please enter a number between 1 and {}", options),
        }
    }
}
