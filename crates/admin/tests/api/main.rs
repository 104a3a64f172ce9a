mod helpers;
mod ui_fragments;
