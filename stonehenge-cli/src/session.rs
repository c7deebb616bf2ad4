//! 交互式对局
//!
//! 输入输出流由调用方提供，终端之外也能驱动一局完整对局。

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use stonehenge_ai::AiEngine;
use stonehenge_core::{Game, Outcome, Player, StonehengeGame, StonehengeState};
use tracing::{info, warn};

use crate::settings::{Controller, PlaySettings};

/// 一局对局
pub struct Session<R, W> {
    input: R,
    output: W,
    settings: PlaySettings,
    game: StonehengeGame,
    /// 按玩家一、玩家二排列
    engines: [Option<AiEngine>; 2],
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// 按设置开新局
    pub fn new(settings: PlaySettings, input: R, output: W) -> Result<Self> {
        let state =
            StonehengeState::with_alphabet(settings.first_player, settings.size, &settings.alphabet)
                .context("Cannot set up the board")?;
        let game = StonehengeGame::new(settings.first_player, state);
        let engines = [
            settings.ai_config(Player::One).map(AiEngine::new),
            settings.ai_config(Player::Two).map(AiEngine::new),
        ];

        Ok(Self {
            input,
            output,
            settings,
            game,
            engines,
        })
    }

    pub fn game(&self) -> &StonehengeGame {
        &self.game
    }

    /// 下完整局，返回结果
    pub fn run(&mut self) -> Result<Outcome> {
        info!(
            "New game: size {}, {} starts, p1 {}, p2 {}",
            self.settings.size, self.settings.first_player, self.settings.p1, self.settings.p2
        );
        writeln!(self.output, "{}\n", self.game.instructions())?;

        loop {
            let state = self.game.current_state().clone();
            writeln!(self.output, "{}", state)?;
            if let Some(outcome) = self.game.outcome(&state) {
                self.announce(outcome)?;
                return Ok(outcome);
            }

            let player = state.current_player();
            let label = match self.settings.controller(player) {
                Controller::Human => self.read_move(player)?,
                Controller::Engine(_) => self.engine_move(player)?,
            };
            self.game.play(label)?;
        }
    }

    /// 反复提示直到读到合法走法
    fn read_move(&mut self, player: Player) -> Result<char> {
        loop {
            write!(self.output, "{}'s move: ", player)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("Input closed before the game finished");
            }

            let label = match self.game.parse_move(&line) {
                Ok(label) => label,
                Err(e) => {
                    warn!("Rejected input {:?}: {}", line.trim_end(), e);
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
            };

            if self.game.current_state().possible_moves().contains(&label) {
                return Ok(label);
            }
            warn!("Rejected move {} for {}", label, player);
            writeln!(self.output, "{} is not a legal move. Try again.", label)?;
        }
    }

    fn engine_move(&mut self, player: Player) -> Result<char> {
        let slot = match player {
            Player::One => 0,
            Player::Two => 1,
        };
        let Some(engine) = self.engines[slot].as_mut() else {
            bail!("No engine configured for {}", player);
        };

        let label = engine.choose_move(&self.game)?;
        writeln!(
            self.output,
            "{} ({}) plays {} after {} nodes",
            player,
            engine.config().strategy,
            label,
            engine.nodes_searched()
        )?;
        Ok(label)
    }

    fn announce(&mut self, outcome: Outcome) -> Result<()> {
        info!("Game over: {}", outcome);
        match outcome {
            Outcome::Winner(player) => writeln!(self.output, "Game over! {} wins!", player)?,
            Outcome::Tie => writeln!(self.output, "Game over! It's a tie.")?,
        }
        Ok(())
    }
}
