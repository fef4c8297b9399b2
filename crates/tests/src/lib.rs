#[cfg(test)]
mod common;

#[cfg(test)]
mod login_flow_tests;

#[cfg(test)]
mod session_guard_tests;

#[cfg(test)]
mod ticket_list_tests;

#[cfg(test)]
mod ticket_mutation_tests;
