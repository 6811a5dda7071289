use bingo_core as game;
use game::RandomDealer;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::storage::Backend;
use crate::utils::SeedSource;

pub trait HasUpdate {
    fn has_update(self) -> bool;
}

impl<E> HasUpdate for Result<(), E> {
    fn has_update(self) -> bool {
        self.is_ok()
    }
}

impl<E> HasUpdate for Result<game::MarkOutcome, E> {
    fn has_update(self) -> bool {
        self.map_or(false, |outcome: game::MarkOutcome| outcome.has_update())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    SetPending(String),
    AddWord,
    ResetWords,
    StartGame,
    ToggleMark(usize),
    RestartSameWords,
    RestartNewWords,
}

/// Everything behind the view: the store plus the text being typed.
#[derive(Debug)]
pub(crate) struct BingoSession {
    store: game::GameStore<Backend>,
    pending: String,
    seeds: SeedSource,
}

impl BingoSession {
    fn new(props: &BingoProps) -> Self {
        Self {
            store: game::GameStore::open(Backend::new(props.ephemeral), props.config),
            pending: String::new(),
            seeds: SeedSource::from_arg(props.seed),
        }
    }

    fn can_add_pending(&self) -> bool {
        self.store.can_add(&self.pending)
    }

    fn words_missing(&self) -> usize {
        self.store
            .config()
            .required_words()
            .saturating_sub(self.store.words().len())
    }

    fn apply(&mut self, msg: Msg) -> bool {
        use Msg::*;

        match msg {
            SetPending(text) => {
                if self.pending != text {
                    self.pending = text;
                    true
                } else {
                    false
                }
            }
            AddWord => {
                let updated = self.store.add_word(self.pending.clone()).has_update();
                if updated {
                    self.pending.clear();
                }
                updated
            }
            ResetWords => self.store.reset_words().has_update(),
            StartGame => {
                let dealer = RandomDealer::new(self.seeds.next_seed());
                self.store.start_game(dealer).has_update()
            }
            ToggleMark(index) => self.store.toggle_mark(index).has_update(),
            RestartSameWords => {
                let dealer = RandomDealer::new(self.seeds.next_seed());
                self.store.restart_same_words(dealer).has_update()
            }
            RestartNewWords => {
                self.pending.clear();
                self.store.restart_new_words().has_update()
            }
        }
    }
}

#[derive(Properties, Clone, Debug, PartialEq)]
pub(crate) struct BingoProps {
    #[prop_or_default]
    pub config: game::BoardConfig,
    #[prop_or_default]
    pub seed: Option<u64>,
    #[prop_or_default]
    pub ephemeral: bool,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    index: usize,
    word: AttrValue,
    marked: bool,
    callback: Callback<usize>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        index,
        word,
        marked,
        callback,
    } = props.clone();

    let class = classes!("cell", marked.then_some("marked"));
    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("cell {} clicked", index);
        callback.emit(index);
    });

    html! {
        <td {class} {onclick}>{word}</td>
    }
}

#[derive(Debug)]
pub(crate) struct BingoView {
    session: BingoSession,
    input_ref: NodeRef,
}

impl BingoView {
    fn focus_input(&self) {
        if let Some(input) = self.input_ref.cast::<HtmlInputElement>() {
            if let Err(err) = input.focus() {
                log::warn!("failed to focus input: {:?}", err);
            }
        }
    }

    fn view_collecting(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let session = &self.session;
        let words = session.store.words();
        let can_add = session.can_add_pending();
        let can_start = session.store.can_start();
        let missing = session.words_missing();

        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            SetPending(input.value())
        });
        let onkeydown = ctx.link().batch_callback(move |e: KeyboardEvent| {
            (e.key() == "Enter" && can_add).then_some(AddWord)
        });
        let cb_add = ctx.link().callback(|_: MouseEvent| AddWord);
        let cb_start = ctx.link().callback(|_: MouseEvent| StartGame);
        let cb_reset = ctx.link().callback(|_: MouseEvent| ResetWords);

        html! {
            <section class="collect">
                <div class="entry">
                    <input
                        ref={self.input_ref.clone()}
                        placeholder="Dein Begriff"
                        value={session.pending.clone()}
                        {oninput}
                        {onkeydown}
                    />
                    <button disabled={!can_add} onclick={cb_add}>{"Hinzufügen"}</button>
                </div>
                <ul>
                    { for words.iter().map(|w| html! { <li key={w}>{w}</li> }) }
                </ul>
                if missing > 0 {
                    <small>{format!("Noch {} Begriffe", missing)}</small>
                }
                <nav>
                    <button disabled={!can_start} onclick={cb_start}>{"Start"}</button>
                    <button onclick={cb_reset}>{"Zurücksetzen"}</button>
                </nav>
            </section>
        }
    }

    fn view_playing(&self, ctx: &Context<Self>, board: &game::Board) -> Html {
        use Msg::*;

        let class = classes!("grid", board.has_bingo().then_some("bingo"));
        let cb_same = ctx.link().callback(|_: MouseEvent| RestartSameWords);
        let cb_new = ctx.link().callback(|_: MouseEvent| RestartNewWords);

        html! {
            <section class="play">
                <table {class}>
                    {
                        for board.rows().map(|row| html! {
                            <tr>
                                {
                                    for row.map(|(index, word, marked)| {
                                        let word = AttrValue::from(word.to_string());
                                        let callback = ctx.link().callback(Msg::ToggleMark);
                                        html! {
                                            <CellView {index} {word} {marked} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                <nav>
                    <button onclick={cb_same}>{"Neustart (gleiche Wörter)"}</button>
                    <button onclick={cb_new}>{"Neustart (neue Wörter)"}</button>
                </nav>
            </section>
        }
    }
}

impl Component for BingoView {
    type Message = Msg;
    type Properties = BingoProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            session: BingoSession::new(ctx.props()),
            input_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let refocus = matches!(msg, Msg::AddWord);
        log::trace!("msg: {:?}", msg);

        let updated = self.session.apply(msg);
        if refocus && updated {
            self.focus_input();
        }
        updated
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let content = match self.session.store.board() {
            Some(board) => self.view_playing(ctx, board),
            None => self.view_collecting(ctx),
        };

        html! {
            <div class="bingo">
                <h1>{"Bullshit Bingo"}</h1>
                {content}
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> BingoSession {
        BingoSession::new(&BingoProps {
            config: game::BoardConfig::new(2, 2),
            seed: Some(17),
            ephemeral: true,
        })
    }

    fn type_word(session: &mut BingoSession, word: &str) -> bool {
        session.apply(Msg::SetPending(word.to_string()));
        session.apply(Msg::AddWord)
    }

    #[test]
    fn adding_clears_pending_text() {
        let mut session = session();

        assert!(type_word(&mut session, "  Synergie "));

        assert!(session.pending.is_empty());
        assert_eq!(session.store.words().as_slice(), ["  Synergie "]);
    }

    #[test]
    fn surrounding_spaces_make_a_distinct_word() {
        let mut session = session();
        assert!(type_word(&mut session, "x"));

        session.apply(Msg::SetPending("x ".to_string()));
        assert!(session.can_add_pending());
        assert!(session.apply(Msg::AddWord));

        session.apply(Msg::SetPending("   ".to_string()));
        assert!(session.can_add_pending());

        assert_eq!(session.store.words().as_slice(), ["x", "x "]);
    }

    #[test]
    fn rejected_word_keeps_pending_text() {
        let mut session = session();
        type_word(&mut session, "Agile");

        assert!(!type_word(&mut session, "Agile"));

        assert_eq!(session.pending, "Agile");
        assert!(!session.can_add_pending());
    }

    #[test]
    fn full_round_through_both_screens() {
        let mut session = session();
        for word in ["a", "b", "c"] {
            type_word(&mut session, word);
        }
        assert_eq!(session.words_missing(), 1);
        assert!(!session.apply(Msg::StartGame));

        type_word(&mut session, "d");
        assert!(session.apply(Msg::StartGame));
        assert!(session.apply(Msg::ToggleMark(1)));
        assert!(!session.apply(Msg::ToggleMark(4)));
        assert!(session.apply(Msg::RestartSameWords));
        assert_eq!(session.store.board().map(|b| b.marked_count()), Some(0));

        assert!(session.apply(Msg::RestartNewWords));
        assert!(!session.store.is_started());
        assert!(session.store.words().is_empty());
    }

    #[test]
    fn has_update_is_false_for_errors() {
        let err: Result<game::MarkOutcome, game::BingoError> = Err(game::BingoError::NotPlaying);
        assert!(!err.has_update());

        let err: Result<(), game::BingoError> = Err(game::BingoError::EmptyWord);
        assert!(!err.has_update());
    }
}
